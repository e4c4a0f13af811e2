#![allow(dead_code)]

pub mod command;
pub mod file;

/// Identifier that the first commit on branch number 0 receives
pub fn first_master_commit_id() -> String {
    "A".repeat(40)
}

/// Full identifier with the given branch prefix and sequence suffix
pub fn commit_id(prefix: &str, sequence: &str) -> String {
    assert_eq!(prefix.len(), 10, "branch prefix must hold 10 symbols");
    assert_eq!(sequence.len(), 30, "sequence must hold 30 symbols");

    format!("{prefix}{sequence}")
}
