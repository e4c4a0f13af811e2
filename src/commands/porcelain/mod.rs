//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for the next commit
//! - `rm`: Unstage a file
//! - `commit`: Snapshot the staged files into a new commit
//! - `status`: Show HEAD and the tracked files
//! - `log`: Show commit history
//! - `branch`: List branches
//! - `checkout`: Switch to a branch or commit, or create a branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod rm;
pub mod status;
