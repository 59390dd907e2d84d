pub mod error;
pub mod export;
pub mod extraction;
pub mod generate;
pub mod model;
pub mod rules;
pub mod store;
pub mod validate;

use error::SkyltError;
use extraction::{PageText, PageTextIndex, TextExtractor};
use generate::{GenerateOutcome, PinLocation};
use model::{PageRef, Project};
use rules::{PinPreset, Preset};
use std::ops::Range;
use tracing::{debug, info, warn};

/// Extract the pages of a plan document, attach them to the project and
/// cache their text.
///
/// Returns the project page indices the document occupies.
pub fn scan_document(
    bytes: &[u8],
    source: &str,
    extractor: &dyn TextExtractor,
    project: &mut Project,
    index: &mut PageTextIndex,
) -> Result<Range<usize>, SkyltError> {
    let pages = extractor.extract_pages(bytes)?;
    let first_page = attach_pages(project, source, &pages);
    index.ingest(&project.id, first_page, &pages);

    let blank = pages.iter().filter(|p| p.is_blank()).count();
    if blank > 0 {
        warn!(
            source,
            blank,
            backend = extractor.backend_name(),
            "some pages have no extractable text"
        );
    }
    info!(
        source,
        pages = pages.len(),
        first_page,
        backend = extractor.backend_name(),
        "document scanned"
    );
    Ok(first_page..first_page + pages.len())
}

/// Register pages on the project. The latest attachment of the same source
/// is reused when its page count still matches; otherwise the document is
/// attached again at the end, leaving earlier pages and their pins alone.
fn attach_pages(project: &mut Project, source: &str, pages: &[PageText]) -> usize {
    let latest = project
        .pages
        .iter()
        .rposition(|p| p.source == source && p.index_in_source == 0);
    if let Some(start) = latest {
        let attached = project.pages[start..]
            .iter()
            .enumerate()
            .take_while(|(i, p)| p.source == source && p.index_in_source == *i)
            .count();
        if attached == pages.len() {
            return start;
        }
        debug!(
            source,
            attached,
            found = pages.len(),
            "page count changed, attaching document again"
        );
    }

    let first_page = project.pages.len();
    for page in pages {
        project.pages.push(PageRef {
            name: format!("{} p.{}", source_name(source), page.page_number),
            source: source.to_string(),
            index_in_source: page.page_number - 1,
        });
    }
    first_page
}

fn source_name(source: &str) -> &str {
    std::path::Path::new(source)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(source)
}

/// Generate schedule rows from the cached text of one page.
///
/// Fails with [`SkyltError::NoPageText`] when the page was never scanned or
/// has no text, so callers can prompt for a scan instead of reporting
/// "no keywords".
pub fn generate_for_page(
    project: &mut Project,
    index: &PageTextIndex,
    page: usize,
    preset: Option<Preset>,
) -> Result<GenerateOutcome, SkyltError> {
    if page >= project.pages.len() {
        return Err(SkyltError::PageOutOfRange {
            page,
            count: project.pages.len(),
        });
    }
    let text = index
        .non_blank(&project.id, page)
        .ok_or(SkyltError::NoPageText(page))?
        .to_string();
    let preset = project.effective_preset(preset);
    Ok(generate::apply(&text, project, preset))
}

/// Drop a pin on a page, using that page's cached text (if any) to guess
/// room numbers.
pub fn drop_pin(
    project: &mut Project,
    index: &PageTextIndex,
    location: PinLocation,
    preset: Option<&PinPreset>,
) -> usize {
    let text = index.get(&project.id, location.page).map(str::to_string);
    generate::handle_pin_drop(project, location, preset, text.as_deref())
}
