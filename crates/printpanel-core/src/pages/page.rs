//! Page trait and the wrapper enum the page manager stores

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use alloc::boxed::Box;

use crate::pages::home::HomePage;
use crate::pages::parameter::ParameterPage;
use crate::state::ScreenId;
use crate::ui::{Action, TouchEvent};

/// A full-screen page that can be rendered and touched
pub trait Page {
    /// Screen this page renders
    fn id(&self) -> ScreenId;

    fn title(&self) -> &str;

    /// Called when page becomes active
    fn on_activate(&mut self) {}

    /// Called when page becomes inactive
    fn on_deactivate(&mut self) {}

    /// Handle touch events, return action if any
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    fn bounds(&self) -> Rectangle;

    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    fn mark_dirty(&mut self);
}

/// Either page kind, boxed to keep the manager small
pub enum PageWrapper {
    Home(Box<HomePage>),
    Parameter(Box<ParameterPage>),
}

impl Page for PageWrapper {
    fn id(&self) -> ScreenId {
        match self {
            PageWrapper::Home(page) => page.id(),
            PageWrapper::Parameter(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::Home(page) => page.title(),
            PageWrapper::Parameter(page) => page.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            PageWrapper::Home(page) => page.on_activate(),
            PageWrapper::Parameter(page) => page.on_activate(),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            PageWrapper::Home(page) => page.on_deactivate(),
            PageWrapper::Parameter(page) => page.on_deactivate(),
        }
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self {
            PageWrapper::Home(page) => page.handle_touch(event),
            PageWrapper::Parameter(page) => page.handle_touch(event),
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        match self {
            PageWrapper::Home(page) => page.draw_page(display),
            PageWrapper::Parameter(page) => page.draw_page(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            PageWrapper::Home(page) => Page::bounds(&**page),
            PageWrapper::Parameter(page) => Page::bounds(&**page),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            PageWrapper::Home(page) => Page::is_dirty(&**page),
            PageWrapper::Parameter(page) => Page::is_dirty(&**page),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            PageWrapper::Home(page) => Page::mark_clean(&mut **page),
            PageWrapper::Parameter(page) => Page::mark_clean(&mut **page),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            PageWrapper::Home(page) => Page::mark_dirty(&mut **page),
            PageWrapper::Parameter(page) => Page::mark_dirty(&mut **page),
        }
    }
}
