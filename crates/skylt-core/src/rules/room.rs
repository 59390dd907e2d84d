use regex::Regex;
use std::sync::LazyLock;

use super::{sign, ELEV_LOBBY, STAIR};

// Optional A/C prefix, 1-4 digits, optional separator plus 1-3 more digits.
// ASCII digits and word boundaries only.
static ROOM_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\b[AC]?\d{1,4}(?:[-. ]?\d{1,3})?\b").unwrap());

/// Best-effort room number guess: the first numeric-looking token in `text`
/// (`C1-100`, `A204`, `3105`), or an empty string.
///
/// This returns the *first* candidate, which on crowded plan text may be a
/// dimension or a sheet number rather than a room.
pub fn derive_room_number(text: &str) -> String {
    ROOM_NUMBER_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Default `RoomName` for a sign type, case-insensitive.
pub fn default_room_name_for(sign_type: &str) -> &'static str {
    match sign_type.to_uppercase().as_str() {
        sign::INGRESS | sign::EGRESS => STAIR,
        sign::HALL_DIRECT | sign::CALLBOX | sign::EVAC => ELEV_LOBBY,
        _ => "",
    }
}
