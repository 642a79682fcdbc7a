//! Page layer building blocks
//!
//! - Core traits for drawable and touchable elements
//! - Styled components (buttons, text)
//! - Rectangle splitting for header / grid / footer layouts

pub mod components;
pub mod core;
pub mod styling;

pub use components::{Button, TextComponent, TextSize};
pub use self::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use styling::{ButtonVariant, ColorPalette, Padding, Style};
