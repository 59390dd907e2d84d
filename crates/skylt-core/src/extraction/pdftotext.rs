use crate::error::SkyltError;
use crate::extraction::{split_pages, PageText, TextExtractor};
use std::io::Write;
use std::process::{Command, Output};
use tracing::debug;

/// Embedded PDF text via `pdftotext -layout` (poppler-utils), which keeps
/// room tags in reading order and separates pages with form feeds.
pub struct PdftotextExtractor;

fn run_pdftotext(pdf: &[u8]) -> Result<Output, SkyltError> {
    // pdftotext wants a path, so the bytes go through a temp file.
    let mut plan = tempfile::Builder::new()
        .prefix("skylt-plan-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| SkyltError::Extraction(e.to_string()))?;
    plan.write_all(pdf)
        .map_err(|e| SkyltError::Extraction(e.to_string()))?;

    Command::new("pdftotext")
        .args(["-layout", "-enc", "UTF-8"])
        .arg(plan.path())
        .arg("-")
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SkyltError::PdftotextNotFound,
            _ => SkyltError::Extraction(format!("could not run pdftotext: {e}")),
        })
}

impl TextExtractor for PdftotextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, SkyltError> {
        let output = run_pdftotext(bytes)?;
        if !output.status.success() {
            return Err(SkyltError::PdftotextFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let pages = split_pages(&String::from_utf8_lossy(&output.stdout));
        debug!(pages = pages.len(), "pdftotext extracted pages");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
