//! Repository error kinds
//!
//! Core operations return `anyhow::Result` so callers can attach context, but every
//! failure the repository itself detects is raised as a [`RepositoryError`]. Callers
//! that need to branch on the kind recover it with `downcast_ref::<RepositoryError>()`.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("object {oid} not found")]
    ObjectNotFound { oid: ObjectId },

    #[error("corrupt {what}: {reason}")]
    CorruptRecord { what: String, reason: String },

    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("short object id {prefix} is ambiguous ({} candidates)", candidates.len())]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<ObjectId>,
    },

    #[error("no commits yet")]
    NoCommits,
}

impl RepositoryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepositoryError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(what: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::CorruptRecord {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}
