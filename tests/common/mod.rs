#![allow(dead_code)]

pub mod file;

/// Fixed commit date so commit IDs are reproducible across runs
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// `COMMIT_DATE` as printed by `log` and `show`
pub const READABLE_COMMIT_DATE: &str = "Sun Jan 1 12:00:00 2023 +0000";
