//! HEAD reference
//!
//! HEAD is a text file holding the ID of the most recent commit. It is empty (or
//! missing) until the first commit is made, and only a commit ever overwrites it.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;
use std::path::Path;
use tracing::debug;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository control directory (typically `.twig`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    /// Read the current head commit ID
    ///
    /// # Returns
    ///
    /// None before the first commit; a HEAD holding anything but a valid ID is corrupt
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();

        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::io(head_path.to_path_buf(), e).into()),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .map_err(|e| RepositoryError::corrupt(HEAD_REF_NAME, e).into())
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, oid.as_ref())
            .map_err(|e| RepositoryError::io(head_path.to_path_buf(), e))?;
        debug!(%oid, "moved HEAD");

        Ok(())
    }
}
