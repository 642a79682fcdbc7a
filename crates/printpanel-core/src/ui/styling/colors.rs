//! Panel colors
//!
//! RGB565, converted from 8-bit RGB as R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;

/// Screen background - near black
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(16 >> 3, 18 >> 2, 22 >> 3);

/// Header bar and disabled buttons
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(40 >> 3, 44 >> 2, 52 >> 3);

pub const COLOR_STROKE: Rgb565 = Rgb565::new(70 >> 3, 76 >> 2, 88 >> 3);

/// Parameter and preset buttons - steel blue
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(52 >> 3, 101 >> 2, 164 >> 3);

/// Currently selected preset - green
pub const COLOR_SELECTED: Rgb565 = Rgb565::new(60 >> 3, 160 >> 2, 100 >> 3);

/// Lock button while locked - amber
pub const COLOR_LOCKED: Rgb565 = Rgb565::new(200 >> 3, 130 >> 2, 40 >> 3);

pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

/// The colors every page draws with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub primary: Rgb565,
    /// Highlight for the current selection
    pub selected: Rgb565,
    /// Lock button while the panel is locked
    pub locked: Rgb565,
    pub background: Rgb565,
    pub surface: Rgb565,
    pub text_primary: Rgb565,
    pub text_secondary: Rgb565,
    pub text_disabled: Rgb565,
    pub border: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: COLOR_ACCENT,
            selected: COLOR_SELECTED,
            locked: COLOR_LOCKED,
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            text_disabled: DARK_GRAY,
            border: COLOR_STROKE,
        }
    }
}
