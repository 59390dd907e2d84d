use skylt_core::error::SkyltError;
use skylt_core::store::ProjectStore;
use skylt_core::validate::validate;
use std::path::Path;

use crate::output;

pub fn run(store_path: &Path, id_or_name: &str, output_format: &str) -> Result<(), SkyltError> {
    let store = ProjectStore::open(store_path)?;
    let project = store.find(id_or_name)?;
    let issues = validate(project);

    match output_format {
        "json" => output::json::print(&issues)?,
        _ => output::table::print_issues(&issues),
    }
    Ok(())
}
