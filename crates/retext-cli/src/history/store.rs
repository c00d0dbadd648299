use std::path::{Path, PathBuf};

use anyhow::Context as _;

use super::types::HistoryRecord;

/// Repository for the single persisted history slot: a JSON array of
/// [`HistoryRecord`] at a fixed path. All history mutation goes through
/// this type; nothing else touches the file.
#[derive(Debug, Clone)]
pub struct HistorySlot {
    path: PathBuf,
}

impl HistorySlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted list. Fails open: an absent, unreadable, or
    /// malformed slot yields an empty list, never an error.
    pub fn load(&self) -> Vec<HistoryRecord> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Serialize and persist `records`, creating the parent directory on
    /// first use.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the write
    /// fails. The interactive run path swallows this (best-effort); explicit
    /// history commands surface it.
    pub fn save(&self, records: &[HistoryRecord]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create history dir {}", parent.display()))?;
        }
        let json = serde_json::to_string(records).context("serialize history")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write history slot {}", self.path.display()))?;
        Ok(())
    }
}
