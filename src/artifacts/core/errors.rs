//! Repository error kinds
//!
//! Every command returns `anyhow::Result`, but the failures a caller is expected
//! to react to are raised as a [`RepositoryError`] so they can be recovered with
//! `err.downcast_ref::<RepositoryError>()`.
//!
//! None of these errors leave a partially applied operation behind: the checks
//! that raise them run before any repository state is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("file {} already added", .0.display())]
    AlreadyTracked(PathBuf),

    #[error("file {} not tracked", .0.display())]
    NotTracked(PathBuf),

    #[error("a branch named {0} already exists")]
    BranchExists(String),

    #[error("no branch {0} exists")]
    BranchNotFound(String),

    #[error("commit {0} does not exist")]
    CommitNotFound(String),

    /// Committing is only allowed while attached to a branch.
    #[error("need to be on HEAD of a branch to commit")]
    EmptyBranchHead,

    #[error("corrupt commit identifier \"{0}\"")]
    CorruptIdentifier(String),

    /// The ternary odometer carried past its last symbol, or the branch number
    /// needs more symbols than the identifier prefix holds.
    #[error("commit identifier space exhausted")]
    IdentifierSpaceExhausted,

    #[error("message must contain \"{0}\"")]
    MessageRejected(&'static str),

    #[error("tracked file {} is missing from the working tree", .0.display())]
    MissingTrackedFile(PathBuf),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("there are no commits")]
    EmptyHistory,

    #[error("not a tern repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("repository already initialized in {}", .0.display())]
    AlreadyInitialized(PathBuf),
}

/// Extract the repository error kind carried by an `anyhow::Error`, if any.
pub fn error_kind(error: &anyhow::Error) -> Option<&RepositoryError> {
    error.downcast_ref::<RepositoryError>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_kind_survives_added_context() {
        let err = anyhow::Error::from(RepositoryError::NotTracked(PathBuf::from("y")))
            .context("rm failed");

        assert_eq!(
            error_kind(&err),
            Some(&RepositoryError::NotTracked(PathBuf::from("y")))
        );
    }

    #[test]
    fn messages_name_the_offending_item() {
        let err = RepositoryError::AlreadyTracked(PathBuf::from("x"));
        assert_eq!(err.to_string(), "file x already added");

        let err = RepositoryError::MessageRejected("GO BEARS!");
        assert_eq!(err.to_string(), "message must contain \"GO BEARS!\"");
    }
}
