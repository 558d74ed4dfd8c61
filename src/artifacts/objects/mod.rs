//! Stored object types
//!
//! Two kinds of objects share one content-addressed store:
//!
//! - **Blob**: raw file content
//! - **Commit**: a JSON record of staged files, message, timestamp and parent
//!
//! Neither carries a type header; an object's address is the SHA-1 of its bytes.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
