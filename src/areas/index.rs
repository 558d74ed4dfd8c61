//! Staging index
//!
//! The index lists the files that will make up the next commit, in the order they were
//! staged. It is persisted as a JSON array of `{path, hash}` objects.
//!
//! Staging a path that is already staged replaces the earlier entry: the old entry is
//! dropped and the new one is appended, so each path appears at most once.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::RepositoryError;
use std::path::Path;
use tracing::debug;

/// Staging index
///
/// Holds an in-memory copy of the persisted index. Mutations are only visible to other
/// readers after `write_updates`.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing or empty file is an empty index. Content that does not parse as an
    /// array of entries is a `CorruptRecord`.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(RepositoryError::io(self.path().to_path_buf(), e).into()),
        };

        if content.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str::<Vec<IndexEntry>>(&content)
            .map_err(|e| RepositoryError::corrupt("index", e))?;

        Ok(())
    }

    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.retain(|staged| staged.path != entry.path);
        self.entries.push(entry);
        self.changed = true;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    /// Persist the entries if they changed since the last load or write
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| RepositoryError::io(parent.to_path_buf(), e))?;
        }

        let content = serde_json::to_vec(&self.entries)?;
        std::fs::write(self.path(), content)
            .map_err(|e| RepositoryError::io(self.path().to_path_buf(), e))?;

        debug!(entries = self.entries.len(), "wrote index");
        self.changed = false;

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }
}
