//! Page manager: routes touches through the controller and keeps the active
//! page in step with it

use alloc::boxed::Box;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error};

use crate::controller::PanelController;
use crate::error::PanelError;
use crate::event::InputEvent;
use crate::pages::home::HomePage;
use crate::pages::page::{Page, PageWrapper};
use crate::pages::parameter::ParameterPage;
use crate::state::ScreenId;
use crate::ui::{Action, TouchEvent};
use crate::view::ScreenView;

/// Owns the controller and the page for its current screen.
///
/// Any event that changes controller state rebuilds the page from a fresh
/// view, so home always shows the selections as of its latest entry.
pub struct PageManager {
    controller: PanelController,
    page: PageWrapper,
    display_bounds: Rectangle,
}

impl PageManager {
    pub fn new(controller: PanelController, display_bounds: Rectangle) -> Result<Self, PanelError> {
        let mut page = build_page(&controller, display_bounds)?;
        page.on_activate();

        Ok(Self {
            controller,
            page,
            display_bounds,
        })
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    pub fn page(&self) -> &PageWrapper {
        &self.page
    }

    pub fn current_screen(&self) -> ScreenId {
        self.controller.current_screen()
    }

    pub fn display_bounds(&self) -> Rectangle {
        self.display_bounds
    }

    /// Feed a touch to the active page and apply any resulting action.
    ///
    /// Returns whether the display needs a redraw.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        match self.page.handle_touch(event) {
            Some(action) => {
                debug!("Touch {:?} -> {:?}", event, action);
                self.apply_action(action)
            }
            None => self.page.is_dirty(),
        }
    }

    pub fn apply_action(&mut self, action: Action) -> bool {
        self.handle_event(action.into())
    }

    /// Apply an input event through the controller, dropping malformed ones.
    ///
    /// Returns `false` when nothing changed or the new page could not be built.
    pub fn handle_event(&mut self, event: InputEvent<'_>) -> bool {
        if !self.controller.handle_event(event) {
            return false;
        }
        self.rebuild_page()
    }

    /// Return the controller to its start state and show home.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.rebuild_page();
    }

    fn rebuild_page(&mut self) -> bool {
        let screen = self.controller.current_screen();
        match build_page(&self.controller, self.display_bounds) {
            Ok(mut page) => {
                debug!("Rebuilding page for {}", screen);
                self.page.on_deactivate();
                page.on_activate();
                self.page = page;
                true
            }
            Err(err) => {
                error!("Cannot build page for {}: {}", screen, err);
                false
            }
        }
    }

    /// Draw the current page (full redraw)
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.page.draw_page(display)?;
        self.page.mark_clean();
        Ok(())
    }

    /// Draw only if something changed since the last draw.
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        if !self.page.is_dirty() {
            return Ok(false);
        }
        self.draw(display)?;
        Ok(true)
    }

    pub fn is_dirty(&self) -> bool {
        self.page.is_dirty()
    }
}

fn build_page(controller: &PanelController, bounds: Rectangle) -> Result<PageWrapper, PanelError> {
    let page = match controller.current_view()? {
        ScreenView::Home(view) => PageWrapper::Home(Box::new(HomePage::new(bounds, &view))),
        ScreenView::Parameter(view) => {
            PageWrapper::Parameter(Box::new(ParameterPage::new(bounds, &view)))
        }
    };
    Ok(page)
}
