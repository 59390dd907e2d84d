use crate::rules::{Category, Preset};
use serde::{Deserialize, Serialize};

/// Result of running the keyword rules over one page of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOutcome {
    /// Preset the rows were generated with.
    pub preset: Preset,
    /// Categories whose pattern matched, in table order.
    pub matched: Vec<Category>,
    /// Rows appended by the rules, before deduplication.
    pub generated: usize,
    /// Rows dropped by deduplication (new or pre-existing).
    pub removed_duplicates: usize,
    /// Signed change in schedule length. Zero or negative when everything
    /// generated was already present, or when older duplicates were folded.
    pub net_delta: i64,
}

impl GenerateOutcome {
    pub fn matched_anything(&self) -> bool {
        !self.matched.is_empty()
    }
}
