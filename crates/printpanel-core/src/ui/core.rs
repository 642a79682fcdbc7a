//! Core UI traits and types for the panel page layer

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::event::InputEvent;
use crate::registry::ParameterId;
use crate::state::ScreenId;

/// A 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events delivered by the touchscreen (or the simulator's mouse)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    /// Finger down
    Press(TouchPoint),
    /// Finger moved while down
    Drag(TouchPoint),
    /// Finger lifted
    Release(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Consumed without triggering anything
    Handled,
    /// Pass to the next element
    NotHandled,
    Action(Action),
}

/// What a button press asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLock,
    Navigate(ScreenId),
    Select {
        parameter: ParameterId,
        value: &'static str,
    },
    Back,
}

impl From<Action> for InputEvent<'static> {
    fn from(action: Action) -> Self {
        match action {
            Action::ToggleLock => InputEvent::LockTogglePressed,
            Action::Navigate(screen) => InputEvent::nav(screen),
            Action::Select { parameter, value } => InputEvent::value(parameter, value),
            Action::Back => InputEvent::BackPressed,
        }
    }
}

/// Any UI element that can be drawn
pub trait Drawable {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    fn mark_dirty(&mut self);
}

/// UI elements that respond to touch events
pub trait Touchable {
    fn contains_point(&self, point: TouchPoint) -> bool;

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_map_to_input_events() {
        assert_eq!(
            InputEvent::from(Action::ToggleLock),
            InputEvent::LockTogglePressed
        );
        assert_eq!(
            InputEvent::from(Action::Navigate(ScreenId::Parameter(ParameterId::Speed))),
            InputEvent::NavPressed("speed")
        );
        assert_eq!(
            InputEvent::from(Action::Select {
                parameter: ParameterId::EndConc,
                value: "30%"
            }),
            InputEvent::ValuePressed {
                parameter: "end_conc",
                value: "30%"
            }
        );
        assert_eq!(InputEvent::from(Action::Back), InputEvent::BackPressed);
    }

    #[test]
    fn test_touch_point_conversion() {
        assert_eq!(TouchPoint::new(12, 300).to_point(), Point::new(12, 300));
    }
}
