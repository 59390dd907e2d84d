use skylt_core::error::SkyltError;
use skylt_core::model::RowField;
use skylt_core::store::ProjectStore;
use skylt_core::validate::validate;
use std::path::Path;

use crate::commands::row_index;
use crate::output;

pub fn add(store_path: &Path, id_or_name: &str) -> Result<(), SkyltError> {
    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    let idx = project.add_blank_row();
    println!("Added blank row {}", idx + 1);
    store.save()
}

pub fn set(
    store_path: &Path,
    id_or_name: &str,
    row: usize,
    field: &str,
    value: String,
) -> Result<(), SkyltError> {
    let field: RowField = field.parse()?;

    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    let idx = row_index(row, project.schedule.len())?;
    project.update_row(idx, field, value)?;
    println!("Row {}: {} = '{}'", row, field, project.schedule[idx].get(field));
    output::table::print_issues(&validate(project));
    store.save()
}

pub fn delete(store_path: &Path, id_or_name: &str, row: usize) -> Result<(), SkyltError> {
    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    let idx = row_index(row, project.schedule.len())?;
    let removed = project.remove_row(idx)?;
    println!(
        "Deleted row {}: {} {} {}",
        row, removed.sign_type, removed.room_number, removed.room_name
    );
    output::table::print_issues(&validate(project));
    store.save()
}

pub fn clear(store_path: &Path, id_or_name: &str) -> Result<(), SkyltError> {
    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    let count = project.schedule.len();
    project.clear_schedule();
    println!("Cleared {count} row(s)");
    store.save()
}

pub fn show(store_path: &Path, id_or_name: &str, output_format: &str) -> Result<(), SkyltError> {
    let store = ProjectStore::open(store_path)?;
    let project = store.find(id_or_name)?;
    match output_format {
        "json" => output::json::print(&project.schedule)?,
        _ => output::table::print_schedule(project),
    }
    Ok(())
}
