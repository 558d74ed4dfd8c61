//! Line diffing and commit comparison
//!
//! - `lcs`: longest-common-subsequence line diff producing grouped runs
//! - `commit_diff`: per-file comparison of a commit against its parent

pub mod commit_diff;
pub mod lcs;
