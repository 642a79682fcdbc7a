//! Styling for page elements
//!
//! - [`colors`] - palette constants
//! - [`layout`] - padding and rectangle splitting
//! - [`style`] - element styles and button variants

pub mod colors;
pub mod layout;
pub mod style;

pub use colors::{COLOR_BACKGROUND, ColorPalette, WHITE};
pub use layout::{Padding, grid_cell, inset, split_bottom, split_top};
pub use style::{ButtonVariant, Style};
