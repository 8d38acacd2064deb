use crate::error::Result;
use crate::records::LibraryEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The on-disk side of the catalog: event id → video directory, loaded
/// from a JSON index file. Relative directories are taken under the
/// library root.
pub struct Library {
    entries: Vec<LibraryEntry>,
}

impl Library {
    pub fn load(index_file: &Path, root: &Path) -> Result<Self> {
        let content = fs::read_to_string(index_file)?;
        let raw: HashMap<String, PathBuf> = serde_json::from_str(&content)?;

        let mut entries: Vec<LibraryEntry> = raw
            .into_iter()
            .map(|(id, path)| {
                let path = if path.is_absolute() {
                    path
                } else {
                    root.join(path)
                };
                LibraryEntry { id, path }
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));

        info!("Loaded {} library entries", entries.len());
        Ok(Self { entries })
    }

    pub fn entry(&self, id: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }
}
