use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SkyltError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("unknown rule preset '{0}'. Available: southwood, generic")]
    UnknownPreset(String),

    #[error("unknown pin preset '{0}'. Use one of the palette keys (1, 2, S, L, X) or labels")]
    UnknownPinPreset(String),

    #[error("unknown schedule field '{0}' (expected SignType, RoomNumber, RoomName, Building, Level or Notes)")]
    UnknownField(String),

    #[error("no project matching '{0}'")]
    ProjectNotFound(String),

    #[error("page {page} is out of range (document has {count} page(s))")]
    PageOutOfRange { page: usize, count: usize },

    #[error("schedule row {index} does not exist (schedule has {len} row(s))")]
    RowOutOfRange { index: usize, len: usize },

    #[error("no extracted text for page {0}. Scan the page before generating")]
    NoPageText(usize),

    #[error("failed to load project store from {path}: {reason}")]
    StoreLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
