//! Supporting utilities shared across pomdeps.
//!
//! - [`fs`] - descriptor discovery in directory trees

pub mod fs;
