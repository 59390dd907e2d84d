use crate::generate::engine::elevator_bundle;
use crate::model::{Pin, Project, RowField, ScheduleRow};
use crate::rules::{
    default_room_name_for, derive_room_number, sign, Bundle, PinAction, PinPreset, NOTE_BUNDLE,
    STAIR,
};
use tracing::debug;

/// Where a pin was dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinLocation {
    pub page: usize,
    pub x: f64,
    pub y: f64,
}

/// Record a pin and append the rows its palette preset produces.
///
/// `page_text` is the cached text of the page the pin landed on, used to
/// guess a room number. Rows are appended as-is: repeated drops at the same
/// spot accumulate duplicates, since every pin is a physical sign location.
/// Returns the number of rows appended.
pub fn handle_pin_drop(
    project: &mut Project,
    location: PinLocation,
    preset: Option<&PinPreset>,
    page_text: Option<&str>,
) -> usize {
    let rows = match preset {
        Some(preset) => rows_for_pin(project, &preset.action, page_text.unwrap_or("")),
        None => Vec::new(),
    };
    let added = rows.len();
    project.schedule.extend(rows);

    project.pins.push(Pin {
        page: location.page,
        x: location.x,
        y: location.y,
        preset: preset.map(|p| p.label.to_string()).unwrap_or_default(),
        note: String::new(),
    });

    debug!(
        page = location.page,
        preset = preset.map(|p| p.label).unwrap_or(""),
        rows = added,
        "pin dropped"
    );
    added
}

fn rows_for_pin(project: &Project, action: &PinAction, page_text: &str) -> Vec<ScheduleRow> {
    match action {
        PinAction::Bundle(Bundle::Elevator) => elevator_bundle(project, NOTE_BUNDLE, NOTE_BUNDLE),
        PinAction::Bundle(Bundle::Stair) => {
            let room_number = derive_room_number(page_text);
            vec![
                project.row(sign::INGRESS, &room_number, STAIR, NOTE_BUNDLE),
                project.row(sign::EGRESS, &room_number, STAIR, NOTE_BUNDLE),
            ]
        }
        PinAction::Payload(payload) => {
            let mut row = project.blank_row();
            for (field, value) in &payload.fields {
                row.set(*field, value.as_str());
            }
            row.room_number = derive_room_number(page_text);
            row.room_name =
                default_room_name_for(payload.get(RowField::SignType).unwrap_or("")).to_string();
            vec![row]
        }
    }
}
