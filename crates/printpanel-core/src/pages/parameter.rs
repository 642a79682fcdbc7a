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
use crate::registry::{MAX_PRESETS, ParameterId};
use crate::state::ScreenId;
use crate::ui::styling::{grid_cell, inset, split_bottom, split_top};
use crate::ui::{
    Action, Button, ButtonVariant, ColorPalette, Drawable, Padding, Style, TextComponent,
    TextSize, TouchEvent, TouchResult, Touchable,
};
use crate::view::ParameterView;

/// Selection screen for one parameter.
///
/// The same page serves every parameter: the title and the preset grid come
/// from the [`ParameterView`]. The current selection is highlighted.
pub struct ParameterPage {
    bounds: Rectangle,
    parameter: ParameterId,
    title: TextComponent,
    presets: Vec<Button, MAX_PRESETS>,
    back_button: Button,
    palette: ColorPalette,
    dirty: bool,
}

impl ParameterPage {
    pub fn new(bounds: Rectangle, view: &ParameterView) -> Self {
        let palette = ColorPalette::default();
        let parameter = view.parameter.id;

        let content = inset(bounds, Padding::all(PAGE_MARGIN_PX));
        let (header, rest) = split_top(content, PAGE_HEADER_HEIGHT_PX, BUTTON_GAP_PX);
        let (grid, footer) = split_bottom(rest, FOOTER_HEIGHT_PX, BUTTON_GAP_PX);

        let title = TextComponent::new(header, view.title(), TextSize::Large)
            .with_alignment(Alignment::Center)
            .with_style(
                Style::new()
                    .with_background(palette.surface)
                    .with_foreground(palette.text_primary),
            );

        let mut presets = Vec::new();
        for (index, &value) in view.presets().iter().enumerate() {
            let variant = if view.is_selected(value) {
                ButtonVariant::Selected
            } else {
                ButtonVariant::Primary
            };
            let button = Button::new(
                grid_cell(grid, PRESET_COLUMNS, PRESET_ROWS, index, BUTTON_GAP_PX),
                value,
                Action::Select { parameter, value },
            )
            .with_variant(variant)
            .with_palette(palette);
            // The registry caps preset lists at the grid size.
            presets.push(button).ok();
        }

        let back_bounds = Rectangle::new(
            footer.top_left,
            Size::new(
                FOOTER_BUTTON_WIDTH_PX.min(footer.size.width),
                footer.size.height,
            ),
        );
        let back_button = Button::new(back_bounds, BACK_LABEL, Action::Back)
            .with_variant(ButtonVariant::Outline)
            .with_palette(palette)
            .with_text_size(TextSize::Large);

        Self {
            bounds,
            parameter,
            title,
            presets,
            back_button,
            palette,
            dirty: true,
        }
    }

    /// Preset buttons in registry order
    pub fn preset_buttons(&self) -> &[Button] {
        &self.presets
    }

    pub fn back_button(&self) -> &Button {
        &self.back_button
    }
}

impl Page for ParameterPage {
    fn id(&self) -> ScreenId {
        ScreenId::Parameter(self.parameter)
    }

    fn title(&self) -> &str {
        self.title.text()
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        let buttons = self
            .presets
            .iter_mut()
            .chain(core::iter::once(&mut self.back_button));
        for button in buttons {
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

impl Drawable for ParameterPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.title.draw(display)?;

        for button in &self.presets {
            button.draw(display)?;
        }

        self.back_button.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.title.is_dirty()
            || self.presets.iter().any(|b| b.is_dirty())
            || self.back_button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.back_button.mark_clean();
        for button in &mut self.presets {
            button.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PanelController;
    use crate::ui::TouchPoint;
    use crate::ui::test_display::CountingDisplay;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(480, 320))
    }

    fn center(button: &Button) -> TouchPoint {
        let c = Drawable::bounds(button).center();
        TouchPoint::new(c.x as u16, c.y as u16)
    }

    fn page_for(controller: &PanelController, parameter: ParameterId) -> ParameterPage {
        ParameterPage::new(screen(), &controller.parameter_view(parameter).unwrap())
    }

    #[test]
    fn test_one_button_per_preset() {
        let controller = PanelController::with_builtin_registry().unwrap();
        for parameter in controller.registry().parameters() {
            let page = page_for(&controller, parameter.id);
            assert_eq!(page.preset_buttons().len(), parameter.presets.len());
            assert_eq!(Page::title(&page), parameter.title);
            assert_eq!(page.id(), ScreenId::Parameter(parameter.id));
            for (button, preset) in page.preset_buttons().iter().zip(parameter.presets) {
                assert_eq!(button.label(), *preset);
            }
        }
    }

    #[test]
    fn test_touching_preset_selects_it() {
        let controller = PanelController::with_builtin_registry().unwrap();
        let mut page = page_for(&controller, ParameterId::Temperature);

        let point = center(&page.preset_buttons()[3]);
        assert_eq!(
            page.handle_touch(TouchEvent::Press(point)),
            Some(Action::Select {
                parameter: ParameterId::Temperature,
                value: "45 °C"
            })
        );
    }

    #[test]
    fn test_back_button() {
        let controller = PanelController::with_builtin_registry().unwrap();
        let mut page = page_for(&controller, ParameterId::PrintTime);
        let point = center(page.back_button());
        assert_eq!(page.handle_touch(TouchEvent::Press(point)), Some(Action::Back));
    }

    #[test]
    fn test_current_selection_highlighted() {
        let mut controller = PanelController::with_builtin_registry().unwrap();
        controller.select_value(ParameterId::Speed, "1.5 mm/min").unwrap();
        let page = page_for(&controller, ParameterId::Speed);

        for button in page.preset_buttons() {
            let expected = if button.label() == "1.5 mm/min" {
                ButtonVariant::Selected
            } else {
                ButtonVariant::Primary
            };
            assert_eq!(button.variant(), expected);
        }
    }

    #[test]
    fn test_touch_between_buttons_does_nothing() {
        let controller = PanelController::with_builtin_registry().unwrap();
        let mut page = page_for(&controller, ParameterId::Pressure);
        // inside the outer margin
        assert_eq!(
            page.handle_touch(TouchEvent::Press(TouchPoint::new(2, 150))),
            None
        );
    }

    #[test]
    fn test_draw() {
        let controller = PanelController::with_builtin_registry().unwrap();
        let page = page_for(&controller, ParameterId::StartConc);
        let mut display = CountingDisplay::new(480, 320);
        page.draw_page(&mut display).unwrap();
        assert!(display.pixels >= 480 * 320);
    }
}
