use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use std::path::PathBuf;
use tracing::debug;

impl Repository {
    /// Store the content of every named file and stage it
    ///
    /// All paths are expanded before anything is stored, so a missing path aborts the
    /// whole operation with the index untouched.
    pub async fn add(&self, paths: &[PathBuf]) -> anyhow::Result<Vec<IndexEntry>> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        // Iterate over each provided file path and expand it if it's a directory
        let paths = paths
            .iter()
            .map(|path| self.workspace().list_files(path))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut staged = Vec::with_capacity(paths.len());
        for path in paths {
            let data = self.workspace().read_file(&path)?;
            let blob_id = self.database().store(Blob::new(data))?;
            let entry = IndexEntry::from_path(&path, blob_id);

            debug!(path = %entry.path, oid = %entry.hash, "staged file");
            writeln!(self.writer(), "{} {}", entry.hash, entry.path)?;

            index.add(entry.clone());
            staged.push(entry);
        }

        index.write_updates()?;

        Ok(staged)
    }
}
