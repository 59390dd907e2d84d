use skylt_core::error::SkyltError;
use skylt_core::extraction::{extractor_for_path, PageTextIndex};
use skylt_core::rules::Preset;
use skylt_core::store::ProjectStore;
use skylt_core::validate::validate;
use std::path::{Path, PathBuf};

use crate::commands::page_index;
use crate::output;

pub fn run(
    store_path: &Path,
    id_or_name: &str,
    input_file: PathBuf,
    page: usize,
    preset: Option<&str>,
    output_format: &str,
    dry_run: bool,
) -> Result<(), SkyltError> {
    let preset = preset.map(Preset::from_name_loose);

    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;

    let bytes = std::fs::read(&input_file)?;
    let extractor = extractor_for_path(&input_file);
    let mut index = PageTextIndex::new();
    let source = input_file.display().to_string();
    let scanned =
        skylt_core::scan_document(&bytes, &source, extractor.as_ref(), project, &mut index)?;
    let page = scanned.start + page_index(page, scanned.len())?;

    let outcome = skylt_core::generate_for_page(project, &index, page, preset)?;
    let issues = validate(project);

    match output_format {
        "json" => output::json::print(&serde_json::json!({
            "outcome": outcome,
            "issues": issues,
        }))?,
        _ => {
            output::table::print_outcome(&outcome);
            output::table::print_issues(&issues);
        }
    }

    if dry_run {
        eprintln!("Dry run: project not saved");
        return Ok(());
    }
    store.save()
}
