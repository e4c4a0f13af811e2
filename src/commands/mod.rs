//! Command implementations
//!
//! - `porcelain`: user-facing operations (init, add, rm, commit, status, log,
//!   branch, checkout), each implemented as an `impl Repository` block

pub mod porcelain;
