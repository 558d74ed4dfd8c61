//! Staging entry representation
//!
//! Each entry records a claim: "the file at `path` had content `hash` when it was
//! staged". Entries are copied verbatim into commit records.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct IndexEntry {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    pub hash: ObjectId,
}

impl IndexEntry {
    /// Build an entry from a workspace-relative path
    pub fn from_path(path: &Path, hash: ObjectId) -> Self {
        let path = path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        IndexEntry::new(path, hash)
    }
}
