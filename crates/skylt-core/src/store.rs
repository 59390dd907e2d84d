use crate::error::SkyltError;
use crate::model::Project;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "skylt-projects.json";

/// All projects, persisted as one JSON array.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, SkyltError> {
        let projects = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| SkyltError::StoreLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|e| SkyltError::StoreLoad {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), projects = projects.len(), "project store opened");
        Ok(ProjectStore {
            path: path.to_path_buf(),
            projects,
        })
    }

    pub fn save(&self) -> Result<(), SkyltError> {
        let json = serde_json::to_string_pretty(&self.projects)?;
        std::fs::write(&self.path, json)?;
        info!(path = %self.path.display(), projects = self.projects.len(), "project store saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn create(&mut self, name: &str) -> &mut Project {
        let name = if name.trim().is_empty() {
            "Untitled"
        } else {
            name.trim()
        };
        self.projects.push(Project::new(name));
        let idx = self.projects.len() - 1;
        &mut self.projects[idx]
    }

    /// Find a project by id, or by name when no id matches.
    pub fn find(&self, id_or_name: &str) -> Result<&Project, SkyltError> {
        self.position(id_or_name).map(|i| &self.projects[i])
    }

    pub fn find_mut(&mut self, id_or_name: &str) -> Result<&mut Project, SkyltError> {
        let i = self.position(id_or_name)?;
        Ok(&mut self.projects[i])
    }

    pub fn remove(&mut self, id_or_name: &str) -> Result<Project, SkyltError> {
        let i = self.position(id_or_name)?;
        Ok(self.projects.remove(i))
    }

    fn position(&self, id_or_name: &str) -> Result<usize, SkyltError> {
        self.projects
            .iter()
            .position(|p| p.id == id_or_name)
            .or_else(|| self.projects.iter().position(|p| p.name == id_or_name))
            .ok_or_else(|| SkyltError::ProjectNotFound(id_or_name.to_string()))
    }
}
