//! Hardware-independent core of the print panel
//!
//! Holds the parameter registry, the navigation/selection controller and
//! the embedded-graphics page layer that renders it. The crate is `no_std`
//! with `alloc` so the same code runs on the panel and in the desktop
//! simulator and host tests.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod pages;
pub mod registry;
pub mod state;
pub mod ui;
pub mod view;

pub use config::PanelConfig;
pub use controller::{PanelController, Transition};
pub use error::PanelError;
pub use event::InputEvent;
pub use registry::{PARAMETERS, Parameter, ParameterId, Registry};
pub use state::{NOT_SET, NavigationState, ScreenId, SelectionState};
pub use view::{HomeRow, HomeView, ParameterView, ScreenView};
