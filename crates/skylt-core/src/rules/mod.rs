pub mod builtin;
pub mod keywords;
pub mod room;

pub use builtin::{Bundle, PinAction, PinPayload, PinPreset, Preset};
pub use keywords::{Category, KeywordRule, KeywordTable};
pub use room::{default_room_name_for, derive_room_number};

/// Sign types the engine generates or validates.
pub mod sign {
    pub const CALLBOX: &str = "CALLBOX";
    pub const EVAC: &str = "EVAC";
    pub const HALL_DIRECT: &str = "HALL DIRECT";
    pub const INGRESS: &str = "INGRESS";
    pub const EGRESS: &str = "EGRESS";
    pub const ELEVATOR_LOBBY: &str = "ELEVATOR LOBBY";
    pub const EXIT: &str = "EXIT";
    pub const FOH: &str = "FOH";
    pub const BOH: &str = "BOH";

    /// Sign types that make up a complete elevator lobby bundle.
    pub const ELEVATOR_BUNDLE: [&str; 3] = [CALLBOX, EVAC, HALL_DIRECT];
    /// Sign types that make up a complete stair bundle.
    pub const STAIR_BUNDLE: [&str; 2] = [INGRESS, EGRESS];
}

pub const ELEV_LOBBY: &str = "ELEV. LOBBY";
pub const STAIR: &str = "STAIR";

/// Fixed room numbers used by the Southwood elevator bundle.
pub const ELEV_BUNDLE_ROOM: &str = "1-100";
pub const ELEV_BUNDLE_DOOR_ROOM: &str = "C1-100";

pub const NOTE_AUTO: &str = "Auto";
pub const NOTE_DOOR_TO_LOBBY: &str = "Door to lobby";
pub const NOTE_LEVEL_ONE_ONLY: &str = "Level 1 only";
pub const NOTE_BUNDLE: &str = "Bundle";
