//! Core repository components
//!
//! This module contains the persisted parts of a repository:
//!
//! - `database`: Content-addressed object store for blobs and commits
//! - `index`: Staging area for the next commit
//! - `refs`: The HEAD pointer
//! - `repository`: Handle tying the areas together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
