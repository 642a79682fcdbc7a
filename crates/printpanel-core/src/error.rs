//! Error type shared by the registry, controller and page layer

use core::fmt::Write;

use thiserror_no_std::Error;

use crate::registry::ParameterId;

/// Maximum length of an identifier or value carried inside an error
pub const MAX_KEY_LEN: usize = 32;

/// Identifier or value echoed back in an error, truncated to [`MAX_KEY_LEN`]
pub type Key = heapless::String<MAX_KEY_LEN>;

/// Errors raised by the panel core.
///
/// `Configuration` is fatal and detected at startup. The other variants mean
/// the display layer sent an event referencing something outside the fixed
/// registry; the display loop logs and drops those (see
/// [`PanelController::handle_event`](crate::controller::PanelController::handle_event)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Configuration(heapless::String<64>),
    #[error("Unknown screen: {0}")]
    InvalidScreen(Key),
    #[error("Unknown parameter: {0}")]
    InvalidParameter(Key),
    #[error("Value {value} is not a preset of {parameter}")]
    InvalidValue { parameter: ParameterId, value: Key },
}

impl PanelError {
    /// Build a [`PanelError::Configuration`] from format arguments.
    pub fn configuration(args: core::fmt::Arguments<'_>) -> Self {
        let mut reason = heapless::String::new();
        // Overlong reasons are cut at capacity.
        reason.write_fmt(args).ok();
        PanelError::Configuration(reason)
    }

    pub fn invalid_screen(key: &str) -> Self {
        PanelError::InvalidScreen(truncated(key))
    }

    pub fn invalid_parameter(key: &str) -> Self {
        PanelError::InvalidParameter(truncated(key))
    }

    pub fn invalid_value(parameter: ParameterId, value: &str) -> Self {
        PanelError::InvalidValue {
            parameter,
            value: truncated(value),
        }
    }
}

/// Copy `text` into a fixed-capacity string, dropping whatever does not fit.
pub fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_keeps_short_text() {
        let key: Key = truncated("temperature");
        assert_eq!(key.as_str(), "temperature");
    }

    #[test]
    fn test_truncated_cuts_long_text() {
        let long = "x".repeat(MAX_KEY_LEN + 10);
        let key: Key = truncated(&long);
        assert_eq!(key.len(), MAX_KEY_LEN);
    }

    #[test]
    fn test_truncated_respects_char_boundaries() {
        // '°' is two bytes, so "a°" fills a 3-byte buffer
        let key: heapless::String<3> = truncated("a°C");
        assert_eq!(key.as_str(), "a°");
    }

    #[test]
    fn test_error_messages() {
        let err = PanelError::invalid_value(ParameterId::Temperature, "99 °C");
        assert_eq!(err.to_string(), "Value 99 °C is not a preset of temperature");

        let err = PanelError::invalid_screen("settings");
        assert_eq!(err.to_string(), "Unknown screen: settings");

        let err = PanelError::configuration(format_args!("{} has no presets", "speed"));
        assert_eq!(err.to_string(), "Configuration error: speed has no presets");
    }
}
