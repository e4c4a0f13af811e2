//! Commit identifier generation
//!
//! A new identifier depends only on the previous identifier and the number of
//! the branch being committed to, never on message or file contents:
//!
//! 1. The branch prefix is recomputed from the branch number on every call, so
//!    all commits made on one branch share it regardless of lineage.
//! 2. The sequence suffix is the previous suffix advanced by one step of a
//!    little-endian ternary odometer. The root sentinel counts as an all-maximal
//!    suffix, so the first commit on any branch gets an all-`A` suffix.
//!
//! Distinct branches have distinct prefixes, which keeps two branches cut from
//! the same parent from ever producing the same identifier.

use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit_id::{CommitId, Trit, Trits};
use crate::artifacts::objects::{BRANCH_PREFIX_LENGTH, COMMIT_ID_LENGTH, SEQUENCE_LENGTH};
use log::debug;

/// Encode `branch_number` in base 3, least-significant trit first.
///
/// Fails with `IdentifierSpaceExhausted` when the number needs more than
/// `BRANCH_PREFIX_LENGTH` trits.
pub fn branch_prefix(branch_number: usize) -> anyhow::Result<[Trit; BRANCH_PREFIX_LENGTH]> {
    let mut prefix = [Trit::A; BRANCH_PREFIX_LENGTH];
    let mut remaining = branch_number;

    for slot in prefix.iter_mut() {
        *slot = Trit::from_value(remaining % 3);
        remaining /= 3;
    }

    if remaining != 0 {
        return Err(RepositoryError::IdentifierSpaceExhausted.into());
    }

    Ok(prefix)
}

/// Advance a sequence suffix by one. `None` stands for the root sentinel.
///
/// Returns `IdentifierSpaceExhausted` when the carry runs off the last symbol.
pub fn increment(suffix: Option<&[Trit]>) -> anyhow::Result<[Trit; SEQUENCE_LENGTH]> {
    let Some(suffix) = suffix else {
        // every root symbol carries, leaving zeros behind
        return Ok([Trit::A; SEQUENCE_LENGTH]);
    };

    let mut next = [Trit::A; SEQUENCE_LENGTH];
    next.copy_from_slice(suffix);

    let carried_out = next.iter_mut().all(|slot| {
        let (digit, carry) = match slot {
            Trit::A => (Trit::B, false),
            Trit::B => (Trit::C, false),
            Trit::C => (Trit::A, true),
        };
        *slot = digit;
        carry
    });

    if carried_out {
        return Err(RepositoryError::IdentifierSpaceExhausted.into());
    }

    Ok(next)
}

/// Identifier for the commit following `previous` on branch `branch_number`.
pub fn next_commit_id(previous: &CommitId, branch_number: usize) -> anyhow::Result<CommitId> {
    let prefix = branch_prefix(branch_number)?;
    let suffix = increment(previous.sequence())?;

    let mut trits: Trits = [Trit::A; COMMIT_ID_LENGTH];
    trits[..BRANCH_PREFIX_LENGTH].copy_from_slice(&prefix);
    trits[BRANCH_PREFIX_LENGTH..].copy_from_slice(&suffix);

    let next = CommitId::Sequence(trits);
    debug!("next commit id after {previous} on branch #{branch_number}: {next}");

    Ok(next)
}
