//! Commit history traversal
//!
//! - `rev_list`: lazy walk of the parent chain from a starting commit
//! - `revision`: parsing and resolving user-supplied commit names
//!
//! History is linear: every commit has at most one parent, so the walk simply follows
//! `parent` links until it reaches the root commit.

pub mod rev_list;
pub mod revision;
