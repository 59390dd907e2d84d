pub mod dedup;
pub mod engine;
pub mod outcome;
pub mod pins;

pub use dedup::dedup_schedule;
pub use engine::{apply, apply_with_table};
pub use outcome::GenerateOutcome;
pub use pins::{handle_pin_drop, PinLocation};
