//! Parameter registry
//!
//! The panel controls a fixed set of parameters. Each one is described by a
//! [`Parameter`]: a display label, the title shown on its selection screen and
//! the ordered list of preset values the operator can pick from. The set is
//! defined at build time in [`PARAMETERS`] and validated once at startup by
//! [`Registry::validate`].
//!
//! Preset values are unit-annotated strings (`"45 °C"`, `"0.5 mm/min"`,
//! `"50%"`). They are only ever displayed; nothing here drives hardware.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Number of parameters the panel controls
pub const PARAMETER_COUNT: usize = 8;

/// Largest preset list a selection screen can lay out (3 columns x 4 rows)
pub const MAX_PRESETS: usize = 12;

/// Identifier of a controllable parameter.
///
/// The discriminant doubles as the index into [`PARAMETERS`] and into the
/// per-parameter slots of [`SelectionState`](crate::state::SelectionState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterId {
    Temperature,
    Speed,
    Pressure,
    StartConc,
    EndConc,
    VolumeS1,
    VolumeS2,
    PrintTime,
}

impl ParameterId {
    /// All parameters in home screen order
    pub const ALL: [ParameterId; PARAMETER_COUNT] = [
        ParameterId::Temperature,
        ParameterId::Speed,
        ParameterId::Pressure,
        ParameterId::StartConc,
        ParameterId::EndConc,
        ParameterId::VolumeS1,
        ParameterId::VolumeS2,
        ParameterId::PrintTime,
    ];

    /// Stable string key used by the display layer and in logs.
    pub const fn key(self) -> &'static str {
        match self {
            ParameterId::Temperature => "temperature",
            ParameterId::Speed => "speed",
            ParameterId::Pressure => "pressure",
            ParameterId::StartConc => "start_conc",
            ParameterId::EndConc => "end_conc",
            ParameterId::VolumeS1 => "volume_s1",
            ParameterId::VolumeS2 => "volume_s2",
            ParameterId::PrintTime => "print_time",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a parameter key, failing with [`PanelError::InvalidParameter`].
    pub fn from_key(key: &str) -> Result<Self, PanelError> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| PanelError::invalid_parameter(key))
    }
}

impl FromStr for ParameterId {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Static description of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub id: ParameterId,
    /// Short label shown on the home screen row
    pub label: &'static str,
    /// Heading of the parameter's selection screen
    pub title: &'static str,
    /// Ordered preset values, already unit-annotated
    pub presets: &'static [&'static str],
}

impl Parameter {
    /// Position of `value` in the preset list, if it is a preset.
    pub fn preset_index(&self, value: &str) -> Option<usize> {
        self.presets.iter().position(|p| *p == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.preset_index(value).is_some()
    }

    /// The registry-owned copy of `value`, if it is a preset.
    pub fn canonical(&self, value: &str) -> Option<&'static str> {
        self.presets.iter().copied().find(|p| *p == value)
    }
}

/// Built-in parameter table
pub static PARAMETERS: [Parameter; PARAMETER_COUNT] = [
    Parameter {
        id: ParameterId::Temperature,
        label: "Temperature",
        title: "Set Temperature (°C)",
        presets: &[
            "20 °C", "37 °C", "40 °C", "45 °C", "50 °C", "55 °C", "60 °C", "65 °C",
        ],
    },
    Parameter {
        id: ParameterId::Speed,
        label: "Speed",
        title: "Set Print Speed (mm/min)",
        presets: &[
            "0.25 mm/min",
            "0.5 mm/min",
            "0.75 mm/min",
            "1 mm/min",
            "1.25 mm/min",
            "1.5 mm/min",
            "1.75 mm/min",
            "2.0 mm/min",
        ],
    },
    Parameter {
        id: ParameterId::Pressure,
        label: "Pressure",
        title: "Set Pressure (psi)",
        presets: &[
            "5 psi", "10 psi", "15 psi", "20 psi", "25 psi", "30 psi", "35 psi", "40 psi",
            "45 psi", "50 psi",
        ],
    },
    Parameter {
        id: ParameterId::StartConc,
        label: "Start Conc",
        title: "Start Concentration (%)",
        presets: &[
            "0%", "10%", "20%", "30%", "40%", "50%", "60%", "70%", "80%", "90%", "100%",
        ],
    },
    Parameter {
        id: ParameterId::EndConc,
        label: "End Conc",
        title: "End Concentration (%)",
        presets: &[
            "0%", "10%", "20%", "30%", "40%", "50%", "60%", "70%", "80%", "90%", "100%",
        ],
    },
    Parameter {
        id: ParameterId::VolumeS1,
        label: "Volume S1",
        title: "Volume S1 (uL)",
        presets: &["10 uL", "20 uL", "30 uL", "40 uL", "50 uL"],
    },
    Parameter {
        id: ParameterId::VolumeS2,
        label: "Volume S2",
        title: "Volume S2 (mL)",
        presets: &[
            "0.0 mL", "0.1 mL", "0.2 mL", "0.3 mL", "0.4 mL", "0.5 mL", "0.6 mL", "0.7 mL",
            "0.8 mL", "0.9 mL",
        ],
    },
    Parameter {
        id: ParameterId::PrintTime,
        label: "Print Time",
        title: "Print Time (sec)",
        presets: &["30 sec", "60 sec", "90 sec", "120 sec"],
    },
];

/// Read-only view over a parameter table.
///
/// Cheap to copy; the table itself is `'static`.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    parameters: &'static [Parameter],
}

impl Registry {
    /// Wrap and validate a parameter table.
    pub fn new(parameters: &'static [Parameter]) -> Result<Self, PanelError> {
        let registry = Self { parameters };
        registry.validate()?;
        Ok(registry)
    }

    /// The built-in table.
    pub fn builtin() -> Result<Self, PanelError> {
        Self::new(&PARAMETERS)
    }

    /// Wrap a table as is, so tests can exercise a broken one.
    #[cfg(test)]
    pub(crate) const fn unchecked(parameters: &'static [Parameter]) -> Self {
        Self { parameters }
    }

    /// Check the table is usable by the controller and the page layer.
    ///
    /// Every [`ParameterId`] must have exactly one descriptor, and every
    /// preset list must be non-empty, duplicate-free and no longer than
    /// [`MAX_PRESETS`].
    pub fn validate(&self) -> Result<(), PanelError> {
        for id in ParameterId::ALL {
            let count = self.parameters.iter().filter(|p| p.id == id).count();
            match count {
                0 => return Err(PanelError::configuration(format_args!("{id} is not registered"))),
                1 => {}
                _ => {
                    return Err(PanelError::configuration(format_args!(
                        "{id} is registered {count} times"
                    )));
                }
            }
        }

        for parameter in self.parameters {
            let id = parameter.id;
            if parameter.presets.is_empty() {
                return Err(PanelError::configuration(format_args!("{id} has no presets")));
            }
            if parameter.presets.len() > MAX_PRESETS {
                return Err(PanelError::configuration(format_args!(
                    "{id} has {} presets (max {MAX_PRESETS})",
                    parameter.presets.len()
                )));
            }
            for (i, preset) in parameter.presets.iter().enumerate() {
                if parameter.presets[..i].contains(preset) {
                    return Err(PanelError::configuration(format_args!(
                        "{id} lists {preset} twice"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a parameter descriptor.
    ///
    /// A miss means the table is misconfigured, so it is reported as
    /// [`PanelError::Configuration`].
    pub fn get(&self, id: ParameterId) -> Result<&'static Parameter, PanelError> {
        let parameters: &'static [Parameter] = self.parameters;
        parameters
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PanelError::configuration(format_args!("{id} is not registered")))
    }

    /// Parameters in home screen order.
    pub fn parameters(&self) -> impl Iterator<Item = &'static Parameter> {
        let parameters: &'static [Parameter] = self.parameters;
        ParameterId::ALL
            .into_iter()
            .filter_map(move |id| parameters.iter().find(|p| p.id == id))
    }

    pub fn contains_preset(&self, id: ParameterId, value: &str) -> Result<bool, PanelError> {
        Ok(self.get(id)?.contains(value))
    }
}
