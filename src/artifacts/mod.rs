//! Value types and algorithms
//!
//! - `branch`: branch names and checkout target parsing
//! - `checkout`: planning and applying a checkout
//! - `core`: error kinds, filesystem primitives, pager writer
//! - `log`: commit history traversal
//! - `objects`: commit identifiers, the ternary odometer, commit records

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod objects;
