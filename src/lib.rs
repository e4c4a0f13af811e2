//! tern: a minimal snapshot-based version control engine
//!
//! Commits are full copies of the staged files, named by a deterministic
//! branch-aware identifier instead of a content hash.
//!
//! - `areas`: stateful repository parts (index, branch registry, commit store,
//!   working tree) and the `Repository` session object
//! - `artifacts`: identifiers, commit records, branch names, checkout planning,
//!   history traversal
//! - `commands`: user-facing operations on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
