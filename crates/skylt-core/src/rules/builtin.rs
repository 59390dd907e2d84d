use crate::error::SkyltError;
use crate::model::RowField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::sign;

/// Row-generation preset. Only the elevator category branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Southwood projects: elevators expand into the three-sign lobby bundle.
    #[default]
    Southwood,
    /// Fallback for every other preset: one `ELEVATOR LOBBY` row.
    Generic,
}

/// Available predefined row presets.
pub const PRESETS: &[Preset] = &[Preset::Southwood, Preset::Generic];

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Southwood => "southwood",
            Preset::Generic => "generic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Southwood => {
                "Elevators expand into CALLBOX, EVAC and HALL DIRECT signs for ELEV. LOBBY"
            }
            Preset::Generic => "Elevators produce a single ELEVATOR LOBBY sign",
        }
    }

    /// Map any identifier to a preset, sending unknown names to
    /// [`Preset::Generic`].
    pub fn from_name_loose(name: &str) -> Preset {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(preset = name, "unknown rule preset, using generic rows");
            Preset::Generic
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Preset {
    type Err = SkyltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "southwood" => Ok(Preset::Southwood),
            "generic" => Ok(Preset::Generic),
            _ => Err(SkyltError::UnknownPreset(s.to_string())),
        }
    }
}

/// Multi-row bundles that a single pin drop can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundle {
    Elevator,
    Stair,
}

/// Field values merged over a blank row on a pin drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinPayload {
    pub fields: Vec<(RowField, String)>,
}

impl PinPayload {
    pub fn sign_type(sign_type: &str) -> Self {
        PinPayload {
            fields: vec![(RowField::SignType, sign_type.to_string())],
        }
    }

    pub fn get(&self, field: RowField) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinAction {
    Bundle(Bundle),
    Payload(PinPayload),
}

/// An entry of the pin palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPreset {
    /// Keyboard shortcut.
    pub key: char,
    pub label: &'static str,
    pub action: PinAction,
}

/// The built-in pin palette.
pub fn pin_palette() -> Vec<PinPreset> {
    vec![
        PinPreset {
            key: '1',
            label: "FOH",
            action: PinAction::Payload(PinPayload::sign_type(sign::FOH)),
        },
        PinPreset {
            key: '2',
            label: "BOH",
            action: PinAction::Payload(PinPayload::sign_type(sign::BOH)),
        },
        PinPreset {
            key: 'S',
            label: "Stair Bundle",
            action: PinAction::Bundle(Bundle::Stair),
        },
        PinPreset {
            key: 'L',
            label: "Elevator Bundle",
            action: PinAction::Bundle(Bundle::Elevator),
        },
        PinPreset {
            key: 'X',
            label: "Exit",
            action: PinAction::Payload(PinPayload::sign_type(sign::EXIT)),
        },
    ]
}

/// Find a palette entry by shortcut key or label, case-insensitive.
pub fn find_pin_preset(name: &str) -> Result<PinPreset, SkyltError> {
    let wanted = name.trim();
    let mut chars = wanted.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    };
    pin_palette()
        .into_iter()
        .find(|p| {
            p.label.eq_ignore_ascii_case(wanted)
                || key.is_some_and(|c| c.eq_ignore_ascii_case(&p.key))
        })
        .ok_or_else(|| SkyltError::UnknownPinPreset(name.to_string()))
}
