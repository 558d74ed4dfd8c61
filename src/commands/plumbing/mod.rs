//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands give direct access to the object store. They're primarily used
//! for scripting and debugging.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a file's object ID and optionally store it
//! - `cat-file`: Print the raw content of a stored object

pub mod cat_file;
pub mod hash_object;
