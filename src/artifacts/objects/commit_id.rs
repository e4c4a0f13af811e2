//! Commit identifier
//!
//! An identifier is either the root sentinel (no commit yet) or a sequence of
//! 40 trits. On disk and on the command line the trits are spelled `A`, `B`,
//! `C` (values 0, 1, 2) and the root sentinel is forty `Z`s.
//!
//! ## Layout
//!
//! ```text
//! | branch prefix (10) | sequence suffix (30) |
//!   least-significant trit first in both parts
//! ```

use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::{BRANCH_PREFIX_LENGTH, COMMIT_ID_LENGTH, ROOT_SYMBOL};
use std::path::PathBuf;

/// A single base-3 digit of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trit {
    A,
    B,
    C,
}

impl Trit {
    pub fn from_value(value: usize) -> Self {
        match value % 3 {
            0 => Trit::A,
            1 => Trit::B,
            _ => Trit::C,
        }
    }

    pub fn value(self) -> usize {
        match self {
            Trit::A => 0,
            Trit::B => 1,
            Trit::C => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Trit::A => 'A',
            Trit::B => 'B',
            Trit::C => 'C',
        }
    }

    pub fn try_from_char(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Trit::A),
            'B' => Some(Trit::B),
            'C' => Some(Trit::C),
            _ => None,
        }
    }
}

pub type Trits = [Trit; COMMIT_ID_LENGTH];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitId {
    /// History root: no commit exists behind this pointer
    Root,
    Sequence(Trits),
}

impl CommitId {
    /// Parse a persisted identifier.
    ///
    /// Accepts the root sentinel or exactly 40 symbols over `{A, B, C}`.
    /// Anything else, including a `Z` mixed into a sequence, is corrupt.
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        let corrupt = || RepositoryError::CorruptIdentifier(id.to_string());

        if id.chars().count() != COMMIT_ID_LENGTH {
            return Err(corrupt().into());
        }

        if id.chars().all(|symbol| symbol == ROOT_SYMBOL) {
            return Ok(CommitId::Root);
        }

        let mut trits = [Trit::A; COMMIT_ID_LENGTH];
        for (slot, symbol) in trits.iter_mut().zip(id.chars()) {
            *slot = Trit::try_from_char(symbol).ok_or_else(corrupt)?;
        }

        Ok(CommitId::Sequence(trits))
    }

    /// Whether `text` names a literal commit: exactly 40 symbols over
    /// `{A, B, C}`. The root sentinel is never a literal.
    pub fn is_literal(text: &str) -> bool {
        text.chars().count() == COMMIT_ID_LENGTH
            && text.chars().all(|symbol| Trit::try_from_char(symbol).is_some())
    }

    pub fn is_root(&self) -> bool {
        matches!(self, CommitId::Root)
    }

    pub fn branch_prefix(&self) -> Option<&[Trit]> {
        match self {
            CommitId::Root => None,
            CommitId::Sequence(trits) => Some(&trits[..BRANCH_PREFIX_LENGTH]),
        }
    }

    pub fn sequence(&self) -> Option<&[Trit]> {
        match self {
            CommitId::Root => None,
            CommitId::Sequence(trits) => Some(&trits[BRANCH_PREFIX_LENGTH..]),
        }
    }

    /// Directory name of the commit record
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitId::Root => write!(f, "{}", ROOT_SYMBOL.to_string().repeat(COMMIT_ID_LENGTH)),
            CommitId::Sequence(trits) => {
                let id = trits.iter().map(|trit| trit.as_char()).collect::<String>();
                write!(f, "{}", id)
            }
        }
    }
}
