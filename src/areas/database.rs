//! Content-addressed object store
//!
//! Every object is written once to `.twig/objects/<hash>`, where `<hash>` is the SHA-1
//! of the object's bytes. Blobs and commit records share the same flat namespace.

use crate::artifacts::diff::commit_diff::{CommitDiff, FileReport};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Hash content without touching the store
    pub fn hash(content: &[u8]) -> ObjectId {
        ObjectId::from_content(content)
    }

    pub fn commit_diff(&self, commit: &Commit) -> anyhow::Result<Vec<FileReport>> {
        CommitDiff::new(self).compare(commit)
    }

    /// Persist an object unless an object with the same ID already exists
    ///
    /// Storing identical content twice is a no-op and returns the same ID.
    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = Self::hash(&object_content);
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(&self.path)
                .map_err(|e| RepositoryError::io(self.path.to_path_buf(), e))
                .context("Unable to create objects directory")?;

            self.write_object(object_path, object_content)?;
            debug!(oid = %object_id, "stored object");
        } else {
            debug!(oid = %object_id, "object already stored");
        }

        Ok(object_id)
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::ObjectNotFound {
                    oid: object_id.clone(),
                }
                .into())
            }
            Err(e) => Err(RepositoryError::io(object_path, e).into()),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        Blob::deserialize(self.load(object_id)?)
            .with_context(|| format!("Unable to read blob {object_id}"))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        Commit::deserialize(self.load(object_id)?)
            .with_context(|| format!("Unable to read commit {object_id}"))
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .map_err(|e| RepositoryError::io(temp_object_path.clone(), e))?;

        file.write_all(&object_content)
            .map_err(|e| RepositoryError::io(temp_object_path.clone(), e))?;

        // rename the temp file to the object file so readers never see a partial object
        std::fs::rename(&temp_object_path, &object_path)
            .map_err(|e| RepositoryError::io(object_path, e))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose ID starts with the given prefix.
    ///
    /// Used to resolve abbreviated IDs. An empty result means no match; more than one
    /// result means the prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_ascii_lowercase();
        let entries = std::fs::read_dir(&self.path)
            .map_err(|e| RepositoryError::io(self.path.to_path_buf(), e))?;

        let mut matches = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|file_name| file_name.starts_with(&prefix))
            .filter_map(|file_name| ObjectId::try_parse(file_name).ok())
            .collect::<Vec<_>>();
        matches.sort();

        Ok(matches)
    }
}
