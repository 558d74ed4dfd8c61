//! Blob object
//!
//! Blobs store file content. They hold only the raw text, without the file name (the
//! name lives in the staging entry that points at the blob).
//!
//! ## Format
//!
//! On disk: the content bytes, unchanged

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::errors::RepositoryError;
use bytes::Bytes;
use derive_new::new;

/// Blob object representing file content
///
/// Each unique file content is stored once, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: String,
}

impl Blob {
    pub fn into_content(self) -> String {
        self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.content.as_bytes()))
    }
}

impl Unpackable for Blob {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self> {
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|e| RepositoryError::corrupt("blob", e))?;

        Ok(Self::new(content))
    }
}

impl Object for Blob {}
