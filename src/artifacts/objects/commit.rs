//! Commit object
//!
//! Commits are immutable snapshots of the staging index. They contain:
//! - The staged files (path and blob hash pairs), in staging order
//! - The parent commit ID (absent for the root commit)
//! - A timestamp and the commit message
//!
//! ## Format
//!
//! On disk, a single JSON object with fields in this order:
//! ```text
//! {"version":1,"timestamp":"<rfc3339>","message":"...","files":[{"path":..,"hash":..}],"parent":"<sha>"|null}
//! ```

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Schema version written into every commit record
pub const COMMIT_SCHEMA_VERSION: u32 = 1;

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

/// Commit timestamp with its original timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTime(chrono::DateTime<chrono::FixedOffset>);

impl CommitTime {
    pub fn now() -> Self {
        CommitTime(chrono::Local::now().fixed_offset())
    }

    pub fn new(timestamp: chrono::DateTime<chrono::FixedOffset>) -> Self {
        CommitTime(timestamp)
    }

    /// Read the timestamp from `TWIG_COMMIT_DATE`, falling back to now
    ///
    /// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`. A value that parses as neither is an
    /// error rather than a silent fallback.
    pub fn load_from_env() -> anyhow::Result<Self> {
        match std::env::var(COMMIT_DATE_ENV) {
            Ok(date_str) => Self::parse(&date_str)
                .with_context(|| format!("{COMMIT_DATE_ENV} has an invalid date: {date_str}")),
            Err(_) => Ok(Self::now()),
        }
    }

    pub fn parse(date_str: &str) -> anyhow::Result<Self> {
        let timestamp = chrono::DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| chrono::DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))?;

        Ok(CommitTime(timestamp))
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable(&self) -> String {
        self.0.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn as_datetime(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.0
    }
}

/// Commit record
///
/// Field order is part of the format: the commit ID is the hash of the serialized
/// record, so reordering fields changes every ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Commit {
    version: u32,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    message: String,
    files: Vec<IndexEntry>,
    parent: Option<ObjectId>,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent commit ID (None for the root commit)
    /// * `files` - Staged entries, in staging order
    /// * `timestamp` - When the commit was made
    /// * `message` - Commit message
    pub fn new(
        parent: Option<ObjectId>,
        files: Vec<IndexEntry>,
        timestamp: CommitTime,
        message: String,
    ) -> Self {
        Commit {
            version: COMMIT_SCHEMA_VERSION,
            timestamp: timestamp.as_datetime(),
            message,
            files,
            parent,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[IndexEntry] {
        &self.files
    }

    /// Look up the entry recorded for `path`
    ///
    /// If a record lists a path more than once, the last entry wins.
    pub fn file(&self, path: &str) -> Option<&IndexEntry> {
        self.files.iter().rev().find(|entry| entry.path == path)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> CommitTime {
        CommitTime::new(self.timestamp)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("Unable to serialize commit record")?;

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self> {
        let commit = serde_json::from_slice::<Commit>(&bytes)
            .map_err(|e| RepositoryError::corrupt("commit record", e))?;

        if commit.version != COMMIT_SCHEMA_VERSION {
            return Err(RepositoryError::corrupt(
                "commit record",
                format!("unsupported schema version {}", commit.version),
            )
            .into());
        }

        Ok(commit)
    }
}

impl Object for Commit {}
