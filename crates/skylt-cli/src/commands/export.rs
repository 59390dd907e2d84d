use skylt_core::error::SkyltError;
use skylt_core::export::{export_csv_file, write_csv};
use skylt_core::store::ProjectStore;
use std::path::{Path, PathBuf};

pub fn run(store_path: &Path, id_or_name: &str, out: Option<PathBuf>) -> Result<(), SkyltError> {
    let store = ProjectStore::open(store_path)?;
    let project = store.find(id_or_name)?;

    match out {
        Some(path) => {
            export_csv_file(project, &path)?;
            eprintln!(
                "Exported {} row(s) to {}",
                project.schedule.len(),
                path.display()
            );
        }
        None => write_csv(project, std::io::stdout().lock())?,
    }
    Ok(())
}
