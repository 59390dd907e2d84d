use skylt_core::error::SkyltError;
use skylt_core::extraction::{extractor_for_path, PageTextIndex};
use skylt_core::generate::PinLocation;
use skylt_core::rules::builtin::find_pin_preset;
use skylt_core::store::ProjectStore;
use skylt_core::validate::validate;
use std::path::{Path, PathBuf};

use crate::commands::page_index;
use crate::output;

pub fn run(
    store_path: &Path,
    id_or_name: &str,
    preset: &str,
    page: usize,
    x: f64,
    y: f64,
    from: Option<PathBuf>,
) -> Result<(), SkyltError> {
    let preset = find_pin_preset(preset)?;

    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;

    let mut index = PageTextIndex::new();
    if let Some(path) = from {
        let bytes = std::fs::read(&path)?;
        let extractor = extractor_for_path(&path);
        let source = path.display().to_string();
        skylt_core::scan_document(&bytes, &source, extractor.as_ref(), project, &mut index)?;
    }

    let page = page_index(page, project.pages.len().max(1))?;
    let location = PinLocation { page, x, y };
    let added = skylt_core::drop_pin(project, &index, location, Some(&preset));

    println!(
        "Dropped '{}' pin on page {}: {} row(s) added",
        preset.label,
        page + 1,
        added
    );
    output::table::print_issues(&validate(project));
    store.save()
}

pub fn clear(store_path: &Path, id_or_name: &str, page: usize) -> Result<(), SkyltError> {
    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    let page = page_index(page, project.pages.len().max(1))?;
    let removed = project.clear_pins(page);
    println!("Removed {} pin(s) from page {}", removed, page + 1);
    store.save()
}
