//! Commit record
//!
//! A commit is immutable once written. It holds its own identifier, the
//! identifier of its parent (the root sentinel for the first commit of a
//! lineage), the message, the timestamp, and the staging index as it was at
//! commit time. File contents live next to the record in the commit directory
//! and are read through the database, not through this type.
//!
//! ## Format
//!
//! On disk, under `.tern/<id>/`:
//! ```text
//! index     tracked paths, one per line
//! parent    parent identifier
//! message   commit message
//! date      RFC 3339 timestamp
//! tree/     byte-exact copies of every tracked file
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    id: CommitId,
    parent: CommitId,
    message: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Tracked paths, in staging order
    index: Vec<PathBuf>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parent(&self) -> &CommitId {
        &self.parent
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn index(&self) -> &[PathBuf] {
        &self.index
    }
}
