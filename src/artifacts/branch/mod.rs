//! Branch names and checkout targets
//!
//! - `branch_name`: validated branch names
//! - `revision`: classification of a checkout argument as a literal commit
//!   identifier or a branch name

pub mod branch_name;
pub mod revision;

/// Names matching this pattern are rejected. Besides Git's ref-name rules it
/// excludes whitespace, which keeps the one-name-per-line registry parseable.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch every new repository starts on, registered as number 0
pub const DEFAULT_BRANCH: &str = "master";
