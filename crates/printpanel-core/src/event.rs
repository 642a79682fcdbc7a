//! Input events sent by the display layer

use core::fmt;

use crate::registry::ParameterId;
use crate::state::ScreenId;

/// A discrete user input, one per button press.
///
/// Identifiers travel as string keys because that is what the display layer
/// hands over; the controller parses and validates them on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// Lock button on the home screen
    LockTogglePressed,
    /// Navigation button for a screen key
    NavPressed(&'a str),
    /// Preset button on a parameter screen
    ValuePressed { parameter: &'a str, value: &'a str },
    /// Back button on a parameter screen
    BackPressed,
}

impl InputEvent<'static> {
    pub fn nav(screen: ScreenId) -> Self {
        InputEvent::NavPressed(screen.key())
    }

    pub fn value(parameter: ParameterId, value: &'static str) -> Self {
        InputEvent::ValuePressed {
            parameter: parameter.key(),
            value,
        }
    }
}

impl fmt::Display for InputEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::LockTogglePressed => f.write_str("lock_toggle_pressed"),
            InputEvent::NavPressed(target) => write!(f, "nav_pressed({target})"),
            InputEvent::ValuePressed { parameter, value } => {
                write!(f, "value_pressed({parameter}, {value})")
            }
            InputEvent::BackPressed => f.write_str("back_pressed"),
        }
    }
}
