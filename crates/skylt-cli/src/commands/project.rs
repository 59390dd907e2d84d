use skylt_core::error::SkyltError;
use skylt_core::rules::Preset;
use skylt_core::store::ProjectStore;
use std::path::Path;

pub fn new(
    store_path: &Path,
    name: &str,
    building: Option<String>,
    level: Option<String>,
    preset: Option<String>,
) -> Result<(), SkyltError> {
    let preset = preset.map(|p| p.parse::<Preset>()).transpose()?;

    let mut store = ProjectStore::open(store_path)?;
    let project = store.create(name);
    project.building = building.unwrap_or_default();
    project.level = level.unwrap_or_default();
    project.rule_preset = preset;
    println!("Created project '{}' ({})", project.name, project.id);
    store.save()
}

pub fn list(store_path: &Path) -> Result<(), SkyltError> {
    let store = ProjectStore::open(store_path)?;
    if store.projects().is_empty() {
        println!("No projects in {}", store.path().display());
        return Ok(());
    }

    for p in store.projects() {
        let preset = p
            .rule_preset
            .map(|pr| pr.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<10} {:<24} building: {:<8} level: {:<4} preset: {:<9} {} page(s), {} row(s), {} pin(s)",
            p.id,
            p.name,
            p.building,
            p.level,
            preset,
            p.pages.len(),
            p.schedule.len(),
            p.pins.len()
        );
    }
    Ok(())
}

pub fn set(
    store_path: &Path,
    id_or_name: &str,
    name: Option<String>,
    building: Option<String>,
    level: Option<String>,
    preset: Option<String>,
) -> Result<(), SkyltError> {
    let preset = preset.map(|p| p.parse::<Preset>()).transpose()?;

    let mut store = ProjectStore::open(store_path)?;
    let project = store.find_mut(id_or_name)?;
    if let Some(name) = name {
        project.name = name;
    }
    if let Some(building) = building {
        project.building = building;
    }
    if let Some(level) = level {
        project.level = level;
    }
    if preset.is_some() {
        project.rule_preset = preset;
    }
    println!(
        "Project '{}': building '{}', level '{}'",
        project.name, project.building, project.level
    );
    store.save()
}

pub fn delete(store_path: &Path, id_or_name: &str) -> Result<(), SkyltError> {
    let mut store = ProjectStore::open(store_path)?;
    let removed = store.remove(id_or_name)?;
    println!("Deleted project '{}' ({})", removed.name, removed.id);
    store.save()
}
