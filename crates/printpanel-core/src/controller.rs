//! Navigation and selection controller
//!
//! [`PanelController`] owns the whole mutable state of the panel: which
//! screen is showing, whether the child lock is engaged, and the selected
//! value of every parameter. The display layer feeds it [`InputEvent`]s and
//! reads back views.
//!
//! # State machine
//!
//! ```text
//!            navigate (unlocked)
//!   Home ─────────────────────────▶ Parameter(P)
//!    ▲                                   │
//!    └──────── select_value / back ──────┘
//! ```
//!
//! There is no edge between two parameter screens, and navigation while
//! locked is silently ignored. Selecting a value never looks at the lock.

use core::mem;

use log::{debug, info, warn};

use crate::error::PanelError;
use crate::event::InputEvent;
use crate::registry::{ParameterId, Registry};
use crate::state::{NavigationState, ScreenId, SelectionState};
use crate::view::{HomeRow, HomeView, ParameterView, ScreenView};

/// What a handled event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ScreenChanged { from: ScreenId, to: ScreenId },
    /// New value of the lock flag
    LockChanged(bool),
    /// A value was recorded; the current screen is home afterwards
    Selected {
        parameter: ParameterId,
        value: &'static str,
    },
    /// Nothing changed (locked navigation, back on home, ...)
    Ignored,
}

impl Transition {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

pub struct PanelController {
    registry: Registry,
    selections: SelectionState,
    navigation: NavigationState,
}

impl PanelController {
    /// Start on the home screen, locked, with nothing selected.
    ///
    /// Fails with [`PanelError::Configuration`] if `registry` does not pass
    /// [`Registry::validate`].
    pub fn new(registry: Registry) -> Result<Self, PanelError> {
        registry.validate()?;
        Ok(Self {
            registry,
            selections: SelectionState::new(),
            navigation: NavigationState::default(),
        })
    }

    /// Controller over the built-in parameter table.
    pub fn with_builtin_registry() -> Result<Self, PanelError> {
        Self::new(Registry::builtin()?)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigation.screen
    }

    pub fn is_locked(&self) -> bool {
        self.navigation.locked
    }

    /// Flip the child lock.
    ///
    /// The lock button only exists on the home screen, so anywhere else the
    /// flag is left as is and [`Transition::Ignored`] is returned.
    pub fn toggle_lock(&mut self) -> Transition {
        if !self.navigation.screen.is_home() {
            debug!("Lock toggle ignored outside home");
            return Transition::Ignored;
        }

        self.navigation.locked = !self.navigation.locked;
        info!(
            "Panel {}",
            if self.navigation.locked {
                "locked"
            } else {
                "unlocked"
            }
        );
        Transition::LockChanged(self.navigation.locked)
    }

    /// Move to `target` unless the panel is locked.
    ///
    /// Requests while locked, requests for the screen already showing and
    /// requests from one parameter screen to another all return
    /// [`Transition::Ignored`].
    pub fn navigate(&mut self, target: ScreenId) -> Transition {
        if self.navigation.locked {
            debug!("Navigation to {} ignored: panel locked", target);
            return Transition::Ignored;
        }

        let from = self.navigation.screen;
        if !from.is_home() && !target.is_home() {
            debug!("Navigation {} -> {} ignored: not from home", from, target);
            return Transition::Ignored;
        }

        self.set_screen(target)
    }

    /// [`navigate`](Self::navigate) with a screen key from the display layer.
    ///
    /// The key is checked before the lock, so a bad key is reported even
    /// while locked.
    pub fn navigate_key(&mut self, key: &str) -> Result<Transition, PanelError> {
        let target = ScreenId::from_key(key)?;
        Ok(self.navigate(target))
    }

    /// Record `value` for `parameter` and return to home.
    ///
    /// The value must be one of the parameter's presets; on error nothing
    /// changes. The lock state is not consulted.
    pub fn select_value(
        &mut self,
        parameter: ParameterId,
        value: &str,
    ) -> Result<Transition, PanelError> {
        let descriptor = self.registry.get(parameter)?;
        let value = descriptor
            .canonical(value)
            .ok_or_else(|| PanelError::invalid_value(parameter, value))?;

        self.selections.set(parameter, value);
        info!("{} set to {}", parameter, value);
        self.set_screen(ScreenId::Home);

        Ok(Transition::Selected { parameter, value })
    }

    /// [`select_value`](Self::select_value) with a parameter key from the display layer.
    pub fn select_value_key(
        &mut self,
        parameter_key: &str,
        value: &str,
    ) -> Result<Transition, PanelError> {
        let parameter = ParameterId::from_key(parameter_key)?;
        self.select_value(parameter, value)
    }

    /// Back button: always returns to home.
    pub fn go_back(&mut self) -> Transition {
        self.set_screen(ScreenId::Home)
    }

    /// Current selection for `parameter`, or [`NOT_SET`](crate::state::NOT_SET).
    pub fn display_value(&self, parameter: ParameterId) -> &'static str {
        self.selections.display_value(parameter)
    }

    pub fn clear_selection(&mut self, parameter: ParameterId) -> Option<&'static str> {
        let previous = self.selections.clear(parameter);
        if previous.is_some() {
            info!("{} cleared", parameter);
        }
        previous
    }

    /// Back to the start state: home, locked, nothing selected.
    pub fn reset(&mut self) {
        self.selections.clear_all();
        self.navigation = NavigationState::default();
        info!("Panel reset");
    }

    fn set_screen(&mut self, to: ScreenId) -> Transition {
        let from = mem::replace(&mut self.navigation.screen, to);
        if from == to {
            Transition::Ignored
        } else {
            info!("Screen {} -> {}", from, to);
            Transition::ScreenChanged { from, to }
        }
    }

    /// Apply one input event.
    pub fn dispatch(&mut self, event: InputEvent<'_>) -> Result<Transition, PanelError> {
        debug!("Dispatching {} on {}", event, self.navigation.screen);
        match event {
            InputEvent::LockTogglePressed => Ok(self.toggle_lock()),
            InputEvent::NavPressed(key) => self.navigate_key(key),
            InputEvent::ValuePressed { parameter, value } => {
                self.select_value_key(parameter, value)
            }
            InputEvent::BackPressed => Ok(self.go_back()),
        }
    }

    /// Apply an event from the display loop, dropping malformed ones.
    ///
    /// Returns whether the display needs a redraw.
    pub fn handle_event(&mut self, event: InputEvent<'_>) -> bool {
        match self.dispatch(event) {
            Ok(transition) => transition.needs_redraw(),
            Err(err) => {
                warn!("Dropping {}: {}", event, err);
                false
            }
        }
    }

    /// Home screen snapshot built from the current selections.
    pub fn home_view(&self) -> HomeView {
        let rows = self
            .registry
            .parameters()
            .map(|parameter| HomeRow {
                parameter: parameter.id,
                label: parameter.label,
                value: self.display_value(parameter.id),
            })
            .collect();

        HomeView {
            rows,
            locked: self.navigation.locked,
        }
    }

    pub fn parameter_view(&self, parameter: ParameterId) -> Result<ParameterView, PanelError> {
        Ok(ParameterView {
            parameter: self.registry.get(parameter)?,
            selected: self.selections.get(parameter),
        })
    }

    pub fn current_view(&self) -> Result<ScreenView, PanelError> {
        match self.navigation.screen {
            ScreenId::Home => Ok(ScreenView::Home(self.home_view())),
            ScreenId::Parameter(id) => self.parameter_view(id).map(ScreenView::Parameter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Parameter;
    use crate::state::NOT_SET;

    fn controller() -> PanelController {
        PanelController::with_builtin_registry().unwrap()
    }

    fn unlocked() -> PanelController {
        let mut c = controller();
        c.toggle_lock();
        c
    }

    #[test]
    fn test_start_state() {
        let c = controller();
        assert_eq!(c.current_screen(), ScreenId::Home);
        assert!(c.is_locked());
        assert!(c.selections().is_empty());
    }

    #[test]
    fn test_every_parameter_starts_not_set() {
        let c = controller();
        for id in ParameterId::ALL {
            assert_eq!(c.display_value(id), NOT_SET);
        }
    }

    #[test]
    fn test_every_preset_can_be_selected() {
        let mut c = unlocked();
        let registry = *c.registry();
        for parameter in registry.parameters() {
            for &preset in parameter.presets {
                c.navigate(ScreenId::Parameter(parameter.id));
                let transition = c.select_value(parameter.id, preset).unwrap();
                assert_eq!(
                    transition,
                    Transition::Selected {
                        parameter: parameter.id,
                        value: preset
                    }
                );
                assert_eq!(c.display_value(parameter.id), preset);
                assert_eq!(c.current_screen(), ScreenId::Home);
            }
        }
    }

    #[test]
    fn test_navigate_while_locked_is_ignored() {
        let mut c = controller();
        for screen in ScreenId::ALL {
            assert_eq!(c.navigate(screen), Transition::Ignored);
            assert_eq!(c.current_screen(), ScreenId::Home);
        }
    }

    #[test]
    fn test_navigate_when_unlocked() {
        let mut c = unlocked();
        let target = ScreenId::Parameter(ParameterId::Pressure);
        assert_eq!(
            c.navigate(target),
            Transition::ScreenChanged {
                from: ScreenId::Home,
                to: target
            }
        );
        assert_eq!(c.current_screen(), target);
    }

    #[test]
    fn test_no_parameter_to_parameter_navigation() {
        let mut c = unlocked();
        c.navigate(ScreenId::Parameter(ParameterId::Speed));
        assert_eq!(
            c.navigate(ScreenId::Parameter(ParameterId::Pressure)),
            Transition::Ignored
        );
        assert_eq!(c.current_screen(), ScreenId::Parameter(ParameterId::Speed));
    }

    #[test]
    fn test_toggle_lock_twice_restores_state() {
        let mut c = controller();
        let original = c.is_locked();
        c.toggle_lock();
        assert_ne!(c.is_locked(), original);
        c.toggle_lock();
        assert_eq!(c.is_locked(), original);
    }

    #[test]
    fn test_toggle_lock_keeps_selections() {
        let mut c = controller();
        c.select_value(ParameterId::Temperature, "37 °C").unwrap();
        c.toggle_lock();
        c.toggle_lock();
        assert_eq!(c.display_value(ParameterId::Temperature), "37 °C");
    }

    #[test]
    fn test_select_value_ignores_lock() {
        let mut c = controller();
        assert!(c.is_locked());
        c.select_value(ParameterId::PrintTime, "60 sec").unwrap();
        assert_eq!(c.display_value(ParameterId::PrintTime), "60 sec");
        assert!(c.is_locked());
    }

    #[test]
    fn test_select_unknown_value_rejected() {
        let mut c = unlocked();
        c.navigate(ScreenId::Parameter(ParameterId::Temperature));
        let err = c.select_value(ParameterId::Temperature, "99 °C").unwrap_err();
        assert_eq!(err, PanelError::invalid_value(ParameterId::Temperature, "99 °C"));
        // state untouched, still on the selection screen
        assert_eq!(c.display_value(ParameterId::Temperature), NOT_SET);
        assert_eq!(
            c.current_screen(),
            ScreenId::Parameter(ParameterId::Temperature)
        );
    }

    #[test]
    fn test_value_from_another_parameter_rejected() {
        let mut c = controller();
        // "50%" is a concentration preset, not a volume
        assert!(matches!(
            c.select_value(ParameterId::VolumeS1, "50%"),
            Err(PanelError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut c = unlocked();
        assert_eq!(
            c.navigate_key("settings"),
            Err(PanelError::invalid_screen("settings"))
        );
        assert_eq!(
            c.select_value_key("humidity", "40%"),
            Err(PanelError::invalid_parameter("humidity"))
        );
        assert_eq!(c.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_unknown_screen_reported_while_locked() {
        let mut c = controller();
        assert!(c.navigate_key("nowhere").is_err());
        assert_eq!(c.navigate_key("speed"), Ok(Transition::Ignored));
    }

    #[test]
    fn test_back_returns_home() {
        let mut c = unlocked();
        for id in ParameterId::ALL {
            c.navigate(ScreenId::Parameter(id));
            assert_eq!(
                c.go_back(),
                Transition::ScreenChanged {
                    from: ScreenId::Parameter(id),
                    to: ScreenId::Home
                }
            );
        }
        assert_eq!(c.go_back(), Transition::Ignored);
    }

    #[test]
    fn test_toggle_lock_ignored_on_parameter_screen() {
        let mut c = unlocked();
        c.navigate(ScreenId::Parameter(ParameterId::Speed));
        assert_eq!(c.toggle_lock(), Transition::Ignored);
        assert!(!c.is_locked());
        assert_eq!(c.current_screen(), ScreenId::Parameter(ParameterId::Speed));

        c.go_back();
        assert_eq!(c.toggle_lock(), Transition::LockChanged(true));
    }

    static TEMPERATURE_ONLY: [Parameter; 1] = [Parameter {
        id: ParameterId::Temperature,
        label: "Temperature",
        title: "Set Temperature (°C)",
        presets: &["20 °C", "45 °C"],
    }];

    #[test]
    fn test_partial_registry_rejected_at_startup() {
        let registry = Registry::unchecked(&TEMPERATURE_ONLY);
        assert!(matches!(
            PanelController::new(registry),
            Err(PanelError::Configuration(_))
        ));
    }

    #[test]
    fn test_lock_toggle_event_ignored_off_home() {
        let mut c = unlocked();
        c.navigate(ScreenId::Parameter(ParameterId::Speed));
        assert_eq!(
            c.dispatch(InputEvent::LockTogglePressed),
            Ok(Transition::Ignored)
        );
        assert!(!c.is_locked());
    }

    #[test]
    fn test_handle_event_drops_malformed_events() {
        let mut c = unlocked();
        assert!(!c.handle_event(InputEvent::NavPressed("bogus")));
        assert!(!c.handle_event(InputEvent::ValuePressed {
            parameter: "speed",
            value: "fast"
        }));
        assert_eq!(c.current_screen(), ScreenId::Home);
        assert!(c.selections().is_empty());

        assert!(c.handle_event(InputEvent::NavPressed("speed")));
        assert!(!c.handle_event(InputEvent::NavPressed("speed")));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut c = unlocked();
        c.select_value(ParameterId::EndConc, "100%").unwrap();
        c.select_value(ParameterId::StartConc, "0%").unwrap();

        assert_eq!(c.clear_selection(ParameterId::EndConc), Some("100%"));
        assert_eq!(c.clear_selection(ParameterId::EndConc), None);
        assert_eq!(c.display_value(ParameterId::StartConc), "0%");

        c.navigate(ScreenId::Parameter(ParameterId::Speed));
        c.reset();
        assert_eq!(c.navigation(), NavigationState::default());
        assert!(c.selections().is_empty());
    }

    #[test]
    fn test_home_view_reflects_selections() {
        let mut c = controller();
        c.select_value(ParameterId::Temperature, "45 °C").unwrap();

        let view = c.home_view();
        assert!(view.locked);
        assert_eq!(view.rows.len(), ParameterId::ALL.len());

        let row = view.row(ParameterId::Temperature).unwrap();
        assert!(row.is_set());
        assert_eq!(row.to_string(), "Temperature: 45 °C");

        let row = view.row(ParameterId::Speed).unwrap();
        assert!(!row.is_set());
        assert_eq!(row.to_string(), "Speed: Not set");
    }

    #[test]
    fn test_current_view_follows_screen() {
        let mut c = unlocked();
        assert!(matches!(c.current_view(), Ok(ScreenView::Home(_))));

        c.select_value(ParameterId::VolumeS1, "30 uL").unwrap();
        c.navigate(ScreenId::Parameter(ParameterId::VolumeS1));
        match c.current_view().unwrap() {
            ScreenView::Parameter(view) => {
                assert_eq!(view.title(), "Volume S1 (uL)");
                assert_eq!(view.presets().len(), 5);
                assert!(view.is_selected("30 uL"));
                assert!(!view.is_selected("10 uL"));
            }
            other => panic!("expected parameter view, got {other:?}"),
        }
    }
}
