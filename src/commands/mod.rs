//! Command implementations
//!
//! This module contains all command implementations, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object access (hash-object, cat-file)
//! - `porcelain`: User-facing commands for the version control workflow (add, commit, log, show)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! the repository areas into higher-level operations.

pub mod plumbing;
pub mod porcelain;
