//! Panel configuration
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) yields a 480x320 panel.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Smallest display the page layouts fit on
pub const MIN_DISPLAY_WIDTH_PX: u32 = 320;
pub const MIN_DISPLAY_HEIGHT_PX: u32 = 240;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PanelConfig {
    pub display: DisplayConfig,
    pub simulator: SimulatorConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 320,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Pixel scale of the SDL window
    pub window_scale: u32,
    /// Target frame period in milliseconds
    pub frame_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            window_scale: 2,
            frame_ms: 33,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), PanelError> {
        let DisplayConfig { width, height } = self.display;
        if width < MIN_DISPLAY_WIDTH_PX || height < MIN_DISPLAY_HEIGHT_PX {
            return Err(PanelError::configuration(format_args!(
                "display {width}x{height} below {MIN_DISPLAY_WIDTH_PX}x{MIN_DISPLAY_HEIGHT_PX}"
            )));
        }
        if self.simulator.window_scale == 0 {
            return Err(PanelError::configuration(format_args!(
                "window_scale must be at least 1"
            )));
        }
        if self.simulator.frame_ms == 0 {
            return Err(PanelError::configuration(format_args!(
                "frame_ms must be at least 1"
            )));
        }
        Ok(())
    }

    /// Full-screen rectangle at the origin.
    pub fn display_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.display.width, self.display.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.display.width, 480);
        assert_eq!(config.display.height, 320);
        assert_eq!(config.simulator.window_scale, 2);
        assert_eq!(config.simulator.frame_ms, 33);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: PanelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let config: PanelConfig =
            serde_json::from_str(r#"{"display": {"width": 800}, "simulator": {"frame_ms": 16}}"#)
                .unwrap();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 320);
        assert_eq!(config.simulator.window_scale, 2);
        assert_eq!(config.simulator.frame_ms, 16);
    }

    #[test]
    fn test_small_display_rejected() {
        let mut config = PanelConfig::default();
        config.display.height = 200;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: display 480x200 below 320x240"
        );
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut config = PanelConfig::default();
        config.simulator.window_scale = 0;
        assert!(matches!(
            config.validate(),
            Err(PanelError::Configuration(_))
        ));
    }

    #[test]
    fn test_display_bounds() {
        let bounds = PanelConfig::default().display_bounds();
        assert_eq!(bounds.top_left, Point::zero());
        assert_eq!(bounds.size, Size::new(480, 320));
    }
}
