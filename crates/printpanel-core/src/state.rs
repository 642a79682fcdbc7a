//! Selection and navigation state
//!
//! Both structs are plain owned values held by the
//! [`PanelController`](crate::controller::PanelController). Nothing here is
//! global; the display layer only ever sees them by reference.

use core::fmt;
use core::str::FromStr;

use crate::error::PanelError;
use crate::registry::{PARAMETER_COUNT, ParameterId};

/// Shown for a parameter that has never been selected
pub const NOT_SET: &str = "Not set";

/// Number of screens: home plus one per parameter
pub const SCREEN_COUNT: usize = PARAMETER_COUNT + 1;

/// Currently selected value per parameter.
///
/// Values are the registry's own `'static` preset strings, so storing one
/// never allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    values: [Option<&'static str>; PARAMETER_COUNT],
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parameter: ParameterId) -> Option<&'static str> {
        self.values[parameter.index()]
    }

    /// Record `value` for `parameter`, returning the previous selection.
    ///
    /// No validation happens here; the controller checks the value against
    /// the registry first.
    pub fn set(&mut self, parameter: ParameterId, value: &'static str) -> Option<&'static str> {
        self.values[parameter.index()].replace(value)
    }

    pub fn clear(&mut self, parameter: ParameterId) -> Option<&'static str> {
        self.values[parameter.index()].take()
    }

    pub fn clear_all(&mut self) {
        self.values = [None; PARAMETER_COUNT];
    }

    /// Current selection, or [`NOT_SET`].
    pub fn display_value(&self, parameter: ParameterId) -> &'static str {
        self.get(parameter).unwrap_or(NOT_SET)
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    /// Selection screen of one parameter
    Parameter(ParameterId),
}

impl ScreenId {
    /// Every screen: home first, then the parameter screens in home order.
    pub const ALL: [ScreenId; SCREEN_COUNT] = [
        ScreenId::Home,
        ScreenId::Parameter(ParameterId::Temperature),
        ScreenId::Parameter(ParameterId::Speed),
        ScreenId::Parameter(ParameterId::Pressure),
        ScreenId::Parameter(ParameterId::StartConc),
        ScreenId::Parameter(ParameterId::EndConc),
        ScreenId::Parameter(ParameterId::VolumeS1),
        ScreenId::Parameter(ParameterId::VolumeS2),
        ScreenId::Parameter(ParameterId::PrintTime),
    ];

    /// Screen key: `home` or the parameter key.
    pub const fn key(self) -> &'static str {
        match self {
            ScreenId::Home => "home",
            ScreenId::Parameter(id) => id.key(),
        }
    }

    /// Parse a screen key, failing with [`PanelError::InvalidScreen`].
    pub fn from_key(key: &str) -> Result<Self, PanelError> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.key() == key)
            .ok_or_else(|| PanelError::invalid_screen(key))
    }

    pub fn is_home(self) -> bool {
        matches!(self, ScreenId::Home)
    }
}

impl From<ParameterId> for ScreenId {
    fn from(id: ParameterId) -> Self {
        ScreenId::Parameter(id)
    }
}

impl FromStr for ScreenId {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current screen plus the child-lock flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: ScreenId,
    /// While set, navigation away from home is ignored
    pub locked: bool,
}

impl Default for NavigationState {
    /// Home screen, locked.
    fn default() -> Self {
        Self {
            screen: ScreenId::Home,
            locked: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_unset() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        for id in ParameterId::ALL {
            assert_eq!(state.get(id), None);
            assert_eq!(state.display_value(id), NOT_SET);
        }
    }

    #[test]
    fn test_set_replaces_and_clear_resets() {
        let mut state = SelectionState::new();
        assert_eq!(state.set(ParameterId::Speed, "1 mm/min"), None);
        assert_eq!(state.set(ParameterId::Speed, "2.0 mm/min"), Some("1 mm/min"));
        assert_eq!(state.display_value(ParameterId::Speed), "2.0 mm/min");
        assert_eq!(state.get(ParameterId::Pressure), None);

        assert_eq!(state.clear(ParameterId::Speed), Some("2.0 mm/min"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut state = SelectionState::new();
        state.set(ParameterId::VolumeS1, "10 uL");
        state.set(ParameterId::VolumeS2, "0.5 mL");
        state.clear_all();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_screen_keys() {
        assert_eq!(ScreenId::from_key("home"), Ok(ScreenId::Home));
        assert_eq!(
            ScreenId::from_key("volume_s2"),
            Ok(ScreenId::Parameter(ParameterId::VolumeS2))
        );
        for screen in ScreenId::ALL {
            assert_eq!(screen.key().parse::<ScreenId>(), Ok(screen));
        }
    }

    #[test]
    fn test_unknown_screen_key() {
        assert_eq!(
            ScreenId::from_key("settings"),
            Err(PanelError::invalid_screen("settings"))
        );
    }

    #[test]
    fn test_navigation_starts_locked_on_home() {
        let nav = NavigationState::default();
        assert_eq!(nav.screen, ScreenId::Home);
        assert!(nav.locked);
    }
}
