//! twig, a minimal content-addressed version control engine
//!
//! - `areas`: the persisted parts of a repository (object store, index, HEAD, workspace)
//! - `artifacts`: value types and algorithms (objects, line diff, history traversal)
//! - `commands`: operations exposed to the command line
//! - `errors`: repository error kinds

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the repository control directory inside the workspace root
pub const REPOSITORY_DIR: &str = ".twig";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}
