pub mod index;
pub mod pdftotext;
pub mod plain;

pub use index::PageTextIndex;

use crate::error::SkyltError;
use std::path::Path;

/// Text of a single plan page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// One-based page number.
    pub page_number: usize,
    pub text: String,
}

impl PageText {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trait for page text sources (embedded PDF text, OCR output, ...).
pub trait TextExtractor: Send + Sync {
    /// Extract text from document bytes, returning one PageText per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, SkyltError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split text on form feeds, the page separator used by pdftotext and by
/// the plain-text source. Blank pages keep their position; only the empty
/// tail after a final form feed is dropped.
pub(crate) fn split_pages(text: &str) -> Vec<PageText> {
    let mut pages: Vec<PageText> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page)| PageText {
            page_number: i + 1,
            text: page.to_string(),
        })
        .collect();
    if pages.len() > 1 && pages.last().is_some_and(PageText::is_blank) {
        pages.pop();
    }
    pages
}

/// Pick a backend from the file extension: `.pdf` uses pdftotext, anything
/// else is read as plain text.
pub fn extractor_for_path(path: &Path) -> Box<dyn TextExtractor> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        Box::new(pdftotext::PdftotextExtractor)
    } else {
        Box::new(plain::PlainTextExtractor)
    }
}
