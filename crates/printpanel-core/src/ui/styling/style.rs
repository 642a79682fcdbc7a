//! Element styles and button variants

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::{ColorPalette, WHITE};
use super::layout::Padding;

/// Visual style of a single element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background_color: Option<Rgb565>,
    pub foreground_color: Option<Rgb565>,
    pub border_color: Option<Rgb565>,
    /// Border width in pixels (0 = no border)
    pub border_width: u32,
    pub padding: Padding,
}

impl Default for Style {
    /// White text, no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
            padding: Padding::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Fill and stroke for embedded-graphics primitives.
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

/// Predefined button looks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Navigation and preset buttons
    Primary,
    /// Bordered, used for Back
    Outline,
    /// Current selection on a parameter page
    Selected,
    /// Lock button while locked
    Warning,
}

impl ButtonVariant {
    pub fn to_style(&self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.primary)
                .with_foreground(palette.text_primary)
                .with_padding(Padding::symmetric(4, 8)),

            ButtonVariant::Outline => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 2)
                .with_padding(Padding::symmetric(4, 8)),

            ButtonVariant::Selected => Style::new()
                .with_background(palette.selected)
                .with_foreground(palette.text_primary)
                .with_border(palette.text_primary, 2)
                .with_padding(Padding::symmetric(4, 8)),

            ButtonVariant::Warning => Style::new()
                .with_background(palette.locked)
                .with_foreground(palette.background)
                .with_padding(Padding::symmetric(4, 8)),
        }
    }
}
