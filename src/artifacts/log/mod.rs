//! Commit history traversal
//!
//! - `rev_list`: lazy walk from a commit back to the root sentinel, following
//!   parent links one record at a time

pub mod rev_list;
