use crate::error::SkyltError;
use crate::rules::builtin::Preset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One sign entry in a project's schedule.
///
/// Field names serialize with the interchange capitalization (`SignType`,
/// `RoomNumber`, ...) consumed by the CSV export and the project store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "SignType", default)]
    pub sign_type: String,
    #[serde(rename = "RoomNumber", default)]
    pub room_number: String,
    #[serde(rename = "RoomName", default)]
    pub room_name: String,
    #[serde(rename = "Building", default)]
    pub building: String,
    #[serde(rename = "Level", default)]
    pub level: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

/// Identity of a row for deduplication. `Notes` is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub sign_type: String,
    pub room_number: String,
    pub room_name: String,
    pub building: String,
    pub level: String,
}

impl ScheduleRow {
    pub fn key(&self) -> RowKey {
        RowKey {
            sign_type: self.sign_type.clone(),
            room_number: self.room_number.clone(),
            room_name: self.room_name.clone(),
            building: self.building.clone(),
            level: self.level.clone(),
        }
    }

    pub fn get(&self, field: RowField) -> &str {
        match field {
            RowField::SignType => &self.sign_type,
            RowField::RoomNumber => &self.room_number,
            RowField::RoomName => &self.room_name,
            RowField::Building => &self.building,
            RowField::Level => &self.level,
            RowField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: RowField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RowField::SignType => self.sign_type = value,
            RowField::RoomNumber => self.room_number = value,
            RowField::RoomName => self.room_name = value,
            RowField::Building => self.building = value,
            RowField::Level => self.level = value,
            RowField::Notes => self.notes = value,
        }
    }

    /// Values in [`RowField::ALL`] order, as written to the export.
    pub fn values(&self) -> [&str; 6] {
        RowField::ALL.map(|f| self.get(f))
    }
}

/// The six schedule columns, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    SignType,
    RoomNumber,
    RoomName,
    Building,
    Level,
    Notes,
}

impl RowField {
    pub const ALL: [RowField; 6] = [
        RowField::SignType,
        RowField::RoomNumber,
        RowField::RoomName,
        RowField::Building,
        RowField::Level,
        RowField::Notes,
    ];

    pub fn header(self) -> &'static str {
        match self {
            RowField::SignType => "SignType",
            RowField::RoomNumber => "RoomNumber",
            RowField::RoomName => "RoomName",
            RowField::Building => "Building",
            RowField::Level => "Level",
            RowField::Notes => "Notes",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.header())
    }
}

impl FromStr for RowField {
    type Err = SkyltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RowField::ALL
            .into_iter()
            .find(|f| f.header().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkyltError::UnknownField(s.to_string()))
    }
}

/// A location pin dropped on a plan page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub page: usize,
    pub x: f64,
    pub y: f64,
    /// Label of the palette preset used for the drop (empty if none).
    #[serde(default)]
    pub preset: String,
    #[serde(default)]
    pub note: String,
}

/// A plan page (or uploaded image) attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub name: String,
    /// Path of the file the page came from.
    pub source: String,
    /// Zero-based page index inside `source`.
    #[serde(default)]
    pub index_in_source: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub level: String,
    /// Rule preset used when the caller does not pick one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_preset: Option<Preset>,
    #[serde(default)]
    pub pages: Vec<PageRef>,
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub schedule: Vec<ScheduleRow>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Project {
            id: format!("p-{}", &uuid[..7]),
            name: name.into(),
            building: String::new(),
            level: String::new(),
            rule_preset: None,
            pages: Vec::new(),
            pins: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// Level-scoped rules (EXIT) only apply when the level is exactly "1"
    /// after trimming.
    pub fn is_level_one(&self) -> bool {
        self.level.trim() == "1"
    }

    /// A row with every field empty except `Building` and `Level`.
    pub fn blank_row(&self) -> ScheduleRow {
        ScheduleRow {
            building: self.building.clone(),
            level: self.level.clone(),
            ..Default::default()
        }
    }

    /// Build a row carrying this project's building and level.
    pub fn row(
        &self,
        sign_type: &str,
        room_number: &str,
        room_name: &str,
        notes: &str,
    ) -> ScheduleRow {
        ScheduleRow {
            sign_type: sign_type.to_string(),
            room_number: room_number.to_string(),
            room_name: room_name.to_string(),
            notes: notes.to_string(),
            ..self.blank_row()
        }
    }

    pub fn add_blank_row(&mut self) -> usize {
        let row = self.blank_row();
        self.schedule.push(row);
        self.schedule.len() - 1
    }

    pub fn update_row(
        &mut self,
        index: usize,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<(), SkyltError> {
        let len = self.schedule.len();
        let row = self
            .schedule
            .get_mut(index)
            .ok_or(SkyltError::RowOutOfRange { index, len })?;
        row.set(field, value);
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<ScheduleRow, SkyltError> {
        if index >= self.schedule.len() {
            return Err(SkyltError::RowOutOfRange {
                index,
                len: self.schedule.len(),
            });
        }
        Ok(self.schedule.remove(index))
    }

    pub fn clear_schedule(&mut self) {
        self.schedule.clear();
    }

    /// Remove every pin on `page`, returning how many were removed.
    pub fn clear_pins(&mut self, page: usize) -> usize {
        let before = self.pins.len();
        self.pins.retain(|p| p.page != page);
        before - self.pins.len()
    }

    pub fn effective_preset(&self, requested: Option<Preset>) -> Preset {
        requested.or(self.rule_preset).unwrap_or_default()
    }
}
