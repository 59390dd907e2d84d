use crate::error::SkyltError;
use crate::extraction::{split_pages, PageText, TextExtractor};

/// Text that was already extracted elsewhere (an OCR run, a copy-paste).
/// Pages are separated by form feeds.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, SkyltError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "plain"
    }
}
