//! Checkout operations
//!
//! Switching to a commit replaces the tracked part of the working tree: every
//! file named by the current index is removed, the index is replaced by the
//! target commit's index, and every file it names is restored from the target
//! snapshot. The plan is computed and validated before anything is touched.

pub mod migration;
