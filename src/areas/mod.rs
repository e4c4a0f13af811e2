//! Core repository components
//!
//! This module contains the stateful parts of a repository:
//!
//! - `database`: commit graph and snapshot store
//! - `index`: staging index of tracked paths
//! - `refs`: branch registry and HEAD
//! - `repository`: session object tying the areas together
//! - `workspace`: working tree file access

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;

/// Name of the control directory at the repository root
pub const CONTROL_DIR: &str = ".tern";
