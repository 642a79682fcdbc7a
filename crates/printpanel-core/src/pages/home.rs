use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::{
    Drawable as EgDrawable,
    pixelcolor::Rgb565,
    primitives::{PrimitiveStyle, Rectangle},
    text::Alignment,
};
use heapless::Vec;

use crate::pages::constants::*;
use crate::pages::page::Page;
use crate::registry::PARAMETER_COUNT;
use crate::state::ScreenId;
use crate::ui::components::button::MAX_LABEL_LEN;
use crate::ui::styling::{grid_cell, inset, split_bottom, split_top};
use crate::ui::{
    Action, Button, ButtonVariant, ColorPalette, Drawable, Padding, Style, TextComponent,
    TextSize, TouchEvent, TouchResult, Touchable,
};
use crate::view::HomeView;

/// Home screen: one button per parameter showing its current value, and the
/// lock toggle in the footer.
///
/// Built from a [`HomeView`] snapshot; the page manager builds a fresh one
/// each time home is entered or the lock flips.
pub struct HomePage {
    bounds: Rectangle,
    title: TextComponent,
    rows: Vec<Button, PARAMETER_COUNT>,
    lock_button: Button,
    hint: TextComponent,
    locked: bool,
    palette: ColorPalette,
    dirty: bool,
}

impl HomePage {
    pub fn new(bounds: Rectangle, view: &HomeView) -> Self {
        let palette = ColorPalette::default();

        let content = inset(bounds, Padding::all(PAGE_MARGIN_PX));
        let (header, rest) = split_top(content, PAGE_HEADER_HEIGHT_PX, BUTTON_GAP_PX);
        let (grid, footer) = split_bottom(rest, FOOTER_HEIGHT_PX, BUTTON_GAP_PX);

        let title = TextComponent::new(header, HOME_TITLE, TextSize::Large)
            .with_alignment(Alignment::Center)
            .with_style(
                Style::new()
                    .with_background(palette.surface)
                    .with_foreground(palette.text_primary),
            );

        let mut rows = Vec::new();
        for (index, row) in view.rows.iter().enumerate() {
            let mut label: heapless::String<MAX_LABEL_LEN> = heapless::String::new();
            // Overlong labels are cut at capacity.
            write!(label, "{row}").ok();

            let mut button = Button::new(
                grid_cell(grid, HOME_COLUMNS, HOME_ROWS, index, BUTTON_GAP_PX),
                &label,
                Action::Navigate(ScreenId::Parameter(row.parameter)),
            )
            .with_palette(palette);
            button.set_enabled(!view.locked);
            rows.push(button).ok();
        }

        let lock_width = FOOTER_BUTTON_WIDTH_PX.min(footer.size.width);
        let lock_bounds = Rectangle::new(
            footer.top_left,
            Size::new(lock_width, footer.size.height),
        );
        let (label, variant) = if view.locked {
            (LOCKED_LABEL, ButtonVariant::Warning)
        } else {
            (UNLOCKED_LABEL, ButtonVariant::Primary)
        };
        let lock_button = Button::new(lock_bounds, label, Action::ToggleLock)
            .with_variant(variant)
            .with_palette(palette)
            .with_text_size(TextSize::Large);

        let hint_offset = lock_width + BUTTON_GAP_PX;
        let hint_bounds = Rectangle::new(
            footer.top_left + Point::new(hint_offset as i32, 0),
            Size::new(
                footer.size.width.saturating_sub(hint_offset),
                footer.size.height,
            ),
        );
        let hint = TextComponent::new(
            hint_bounds,
            if view.locked { LOCKED_HINT } else { "" },
            TextSize::Medium,
        )
        .with_style(Style::new().with_foreground(palette.text_secondary));

        Self {
            bounds,
            title,
            rows,
            lock_button,
            hint,
            locked: view.locked,
            palette,
            dirty: true,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Parameter buttons in home order
    pub fn row_buttons(&self) -> &[Button] {
        &self.rows
    }

    pub fn lock_button(&self) -> &Button {
        &self.lock_button
    }
}

impl Page for HomePage {
    fn id(&self) -> ScreenId {
        ScreenId::Home
    }

    fn title(&self) -> &str {
        self.title.text()
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        for button in self.rows.iter_mut().chain(core::iter::once(&mut self.lock_button)) {
            match button.handle_touch(event) {
                TouchResult::Action(action) => return Some(action),
                TouchResult::Handled => return None,
                TouchResult::NotHandled => continue,
            }
        }
        None
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }

    fn is_dirty(&self) -> bool {
        Drawable::is_dirty(self)
    }

    fn mark_clean(&mut self) {
        Drawable::mark_clean(self)
    }

    fn mark_dirty(&mut self) {
        Drawable::mark_dirty(self)
    }
}

impl Drawable for HomePage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.title.draw(display)?;

        for button in &self.rows {
            button.draw(display)?;
        }

        self.lock_button.draw(display)?;
        self.hint.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.title.is_dirty()
            || self.rows.iter().any(|b| b.is_dirty())
            || self.lock_button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.hint.mark_clean();
        self.lock_button.mark_clean();
        for button in &mut self.rows {
            button.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
