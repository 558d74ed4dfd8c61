//! Value types and algorithms
//!
//! - `diff`: LCS line diff and commit-to-parent comparison
//! - `index`: staging entry schema
//! - `log`: history traversal and revision parsing
//! - `objects`: stored object types (blob, commit) and object IDs

pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
