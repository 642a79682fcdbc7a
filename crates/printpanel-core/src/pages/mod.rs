pub mod constants;
pub mod home;
pub mod page;
pub mod page_manager;
pub mod parameter;

pub use home::HomePage;
pub use page::{Page, PageWrapper};
pub use page_manager::PageManager;
pub use parameter::ParameterPage;
