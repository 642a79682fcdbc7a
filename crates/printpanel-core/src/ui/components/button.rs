//! Push button with a label and an [`Action`]

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::error::truncated;
use crate::ui::components::text::TextSize;
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};

/// Maximum characters in a button label
pub const MAX_LABEL_LEN: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Normal,
    Pressed,
    Disabled,
}

pub struct Button {
    bounds: Rectangle,
    label: heapless::String<MAX_LABEL_LEN>,
    action: Action,
    state: ButtonState,
    variant: ButtonVariant,
    palette: ColorPalette,
    text_size: TextSize,
    border_radius: u32,
    dirty: bool,
}

impl Button {
    pub fn new(bounds: Rectangle, label: &str, action: Action) -> Self {
        Self {
            bounds,
            label: truncated(label),
            action,
            state: ButtonState::Normal,
            variant: ButtonVariant::Primary,
            palette: ColorPalette::default(),
            text_size: TextSize::Medium,
            border_radius: 6,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self.dirty = true;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let new_state = if enabled {
            ButtonState::Normal
        } else {
            ButtonState::Disabled
        };

        if self.state != new_state {
            self.state = new_state;
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.state, ButtonState::Disabled)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, ButtonState::Pressed)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    fn style(&self) -> Style {
        let base = self.variant.to_style(&self.palette);

        match self.state {
            ButtonState::Normal => base,
            ButtonState::Pressed => {
                let bg = base.background_color.unwrap_or(self.palette.primary);
                let darkened = Rgb565::new(
                    bg.r().saturating_sub(4),
                    bg.g().saturating_sub(8),
                    bg.b().saturating_sub(4),
                );
                base.with_background(darkened)
            }
            ButtonState::Disabled => base
                .with_background(self.palette.surface)
                .with_foreground(self.palette.text_disabled),
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.style();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.text_size.font(), color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.label, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    /// Fires on press. Drag and release only update the pressed highlight.
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.is_enabled() {
            return TouchResult::NotHandled;
        }

        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.state = ButtonState::Pressed;
                self.dirty = true;
                TouchResult::Action(self.action)
            }
            TouchEvent::Drag(point) if self.is_pressed() => {
                if !self.contains_point(point) {
                    self.state = ButtonState::Normal;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            TouchEvent::Release(_) if self.is_pressed() => {
                self.state = ButtonState::Normal;
                self.dirty = true;
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
