//! Integration test suite for pomdeps
//!
//! End-to-end tests that run the compiled `pomdeps` binary against project trees
//! written into temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: argument handling, exit status, stdout/stderr separation
//! - **resolution**: inheritance, property substitution and report contents

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod resolution;
