//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the areas into the version control workflow.
//!
//! ## Commands
//!
//! - `init`: Create the repository control files
//! - `add`: Stage files for commit
//! - `commit`: Snapshot the staged files
//! - `log`: Show commit history
//! - `show`: Show a commit and its changes against its parent

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
