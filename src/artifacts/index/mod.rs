//! Index file format
//!
//! The index (staging area) lists the files that will make up the next commit.
//!
//! ## File Format
//!
//! ```text
//! [
//!   {"path": "a.txt", "hash": "<40 hex chars>"},
//!   ...
//! ]
//! ```
//!
//! An empty array (or an empty/missing file) means nothing is staged.

pub mod index_entry;
