//! Commit identifiers and commit records
//!
//! - `commit_id`: the 40-symbol identifier type, including the root sentinel
//! - `odometer`: branch-prefix encoding and the ternary-odometer increment that
//!   derives each new identifier from the previous one
//! - `commit`: the immutable commit record (parent, message, index snapshot)
//!
//! Identifiers are not content digests. They are a counter: the first
//! `BRANCH_PREFIX_LENGTH` symbols encode the branch number in base 3, and the
//! remaining `SEQUENCE_LENGTH` symbols form a little-endian base-3 counter.

pub mod commit;
pub mod commit_id;
pub mod odometer;

/// Total number of symbols in a commit identifier
pub const COMMIT_ID_LENGTH: usize = 40;

/// Symbols encoding the branch number
pub const BRANCH_PREFIX_LENGTH: usize = 10;

/// Symbols holding the sequence counter
pub const SEQUENCE_LENGTH: usize = COMMIT_ID_LENGTH - BRANCH_PREFIX_LENGTH;

/// Symbol repeated to spell the root sentinel
pub const ROOT_SYMBOL: char = 'Z';
