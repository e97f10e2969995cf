//! Core error types shared by every pomdeps module.
//!
//! The resolver, parser and CLI all report failures through [`PomError`]; the CLI turns
//! them into colored [`ErrorContext`] output with [`user_friendly_error`].

pub mod error;

pub use error::{ErrorContext, PomError, user_friendly_error};
