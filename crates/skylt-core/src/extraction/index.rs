use crate::extraction::PageText;
use std::collections::HashMap;

/// Per-page text cache keyed by project id and zero-based page index.
#[derive(Debug, Clone, Default)]
pub struct PageTextIndex {
    texts: HashMap<(String, usize), String>,
}

impl PageTextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project_id: &str, page: usize, text: impl Into<String>) {
        self.texts
            .insert((project_id.to_string(), page), text.into());
    }

    /// Cache every extracted page, starting at `first_page`.
    pub fn ingest(&mut self, project_id: &str, first_page: usize, pages: &[PageText]) {
        for page in pages {
            self.insert(
                project_id,
                first_page + page.page_number.saturating_sub(1),
                page.text.clone(),
            );
        }
    }

    pub fn get(&self, project_id: &str, page: usize) -> Option<&str> {
        self.texts
            .get(&(project_id.to_string(), page))
            .map(String::as_str)
    }

    /// Cached text for a page, treating whitespace-only text as missing.
    pub fn non_blank(&self, project_id: &str, page: usize) -> Option<&str> {
        self.get(project_id, page).filter(|t| !t.trim().is_empty())
    }
}
