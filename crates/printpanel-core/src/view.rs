//! Per-screen data handed to the display layer
//!
//! Views are snapshots. The home view is recomputed from the selection state
//! each time the home screen becomes visible; it does not track later changes.

use core::fmt;

use heapless::Vec;

use crate::registry::{PARAMETER_COUNT, Parameter, ParameterId};
use crate::state::NOT_SET;

/// One home screen row: parameter label and its current display value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeRow {
    pub parameter: ParameterId,
    pub label: &'static str,
    pub value: &'static str,
}

impl HomeRow {
    pub fn is_set(&self) -> bool {
        self.value != NOT_SET
    }
}

impl fmt::Display for HomeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Everything the home screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub rows: Vec<HomeRow, PARAMETER_COUNT>,
    pub locked: bool,
}

impl HomeView {
    pub fn row(&self, parameter: ParameterId) -> Option<&HomeRow> {
        self.rows.iter().find(|row| row.parameter == parameter)
    }
}

/// Everything a parameter selection screen renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterView {
    pub parameter: &'static Parameter,
    /// Current selection, highlighted on the screen
    pub selected: Option<&'static str>,
}

impl ParameterView {
    pub fn title(&self) -> &'static str {
        self.parameter.title
    }

    pub fn presets(&self) -> &'static [&'static str] {
        self.parameter.presets
    }

    pub fn is_selected(&self, preset: &str) -> bool {
        self.selected == Some(preset)
    }
}

/// View of whichever screen is current
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Home(HomeView),
    Parameter(ParameterView),
}
