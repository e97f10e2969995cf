//! Error handling for pomdeps
//!
//! This module provides the error types and user-facing error reporting for the
//! resolver. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers (and tests) can match on the failure mode
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`PomError`] - every failure the library can produce
//! - [`ErrorContext`] - wrapper adding details and a suggestion for display
//!
//! # Error Tiers
//!
//! - **Descriptor errors**: [`PomError::DescriptorParseError`], naming the `pom.xml`
//!   that could not be read or parsed. The file is skipped.
//! - **Resolution errors**: [`PomError::PropertyNotFound`],
//!   [`PomError::ProjectAttributeNotFound`], [`PomError::PropertyCycle`]. Fatal for the
//!   project being resolved, never for the run.
//! - **Run errors**: [`PomError::RootNotFound`]. Nothing can be discovered.
//!
//! A parent reference that matches no discovered project is *not* an error; the
//! linker logs it and carries on (see [`crate::resolver::linker`]).
//!
//! # Examples
//!
//! ```rust,no_run
//! use pomdeps_cli::core::{PomError, user_friendly_error};
//!
//! let error = PomError::PropertyNotFound {
//!     property: "${spring.version}".to_string(),
//!     project: "maven:org.acme:app@1.0".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for pomdeps operations
///
/// Variants carry the identifiers, paths and property names needed to point the user
/// at the offending descriptor.
#[derive(Error, Debug)]
pub enum PomError {
    /// The root directory handed to the resolver does not exist or is not a directory
    #[error("Root directory not found: {path}")]
    RootNotFound {
        /// The path that was given
        path: String,
    },

    /// A descriptor file could be read but is not a usable `pom.xml`
    #[error("Invalid descriptor {file}: {reason}")]
    DescriptorParseError {
        /// Path to the descriptor that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A `${...}` placeholder could not be resolved in the project or any ancestor
    ///
    /// # Fields
    /// - `property`: The placeholder as written, e.g. `${spring.version}`
    /// - `project`: Identifier of the project whose value was being resolved
    #[error("Cannot find property \"{property}\" for project {project}")]
    PropertyNotFound {
        /// The placeholder as written in the descriptor
        property: String,
        /// Identifier of the project being resolved
        project: String,
    },

    /// A `${project.<name>}` placeholder named an attribute the project model lacks
    #[error("Cannot find property \"{attribute}\" in current project properties of {project}")]
    ProjectAttributeNotFound {
        /// The attribute name after the `project.` prefix, lowercased
        attribute: String,
        /// Identifier of the project being resolved
        project: String,
    },

    /// Property resolution revisited a project or property it was already resolving
    ///
    /// Raised for parent cycles (A's parent is B, B's parent is A) and for properties
    /// whose values reference themselves directly or indirectly.
    #[error("Property cycle detected while resolving {project}: {chain}")]
    PropertyCycle {
        /// Human-readable chain of the visited projects or properties
        chain: String,
        /// Identifier of the project being resolved
        project: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// XML syntax error
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for PomError {
    fn clone(&self) -> Self {
        match self {
            Self::RootNotFound {
                path,
            } => Self::RootNotFound {
                path: path.clone(),
            },
            Self::DescriptorParseError {
                file,
                reason,
            } => Self::DescriptorParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::PropertyNotFound {
                property,
                project,
            } => Self::PropertyNotFound {
                property: property.clone(),
                project: project.clone(),
            },
            Self::ProjectAttributeNotFound {
                attribute,
                project,
            } => Self::ProjectAttributeNotFound {
                attribute: attribute.clone(),
                project: project.clone(),
            },
            Self::PropertyCycle {
                chain,
                project,
            } => Self::PropertyCycle {
                chain: chain.clone(),
                project: project.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::XmlError(e) => Self::Other {
                message: format!("XML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON serialization error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use pomdeps_cli::core::{ErrorContext, PomError};
///
/// let context = ErrorContext::new(PomError::RootNotFound { path: "missing".into() })
///     .with_suggestion("Pass a directory that contains pom.xml files")
///     .with_details("pomdeps searches the directory recursively");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: PomError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PomError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`PomError`] and [`std::io::Error`]; anything else is shown with its
/// full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(pom_error) = error.downcast_ref::<PomError>() {
        return create_error_context(pom_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(PomError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check the permissions of the directory tree being scanned")
                .with_details("Every pom.xml beneath the root must be readable");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(PomError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(PomError::Other {
        message,
    })
}

/// Map each [`PomError`] variant to an [`ErrorContext`] with tailored suggestions.
fn create_error_context(error: PomError) -> ErrorContext {
    match &error {
        PomError::RootNotFound { path } => ErrorContext::new(error.clone())
            .with_suggestion("Pass an existing directory that contains one or more pom.xml files")
            .with_details(format!("'{path}' does not exist or is not a directory")),

        PomError::DescriptorParseError { file, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check that {file} is well-formed XML with a <project> root element"
            ))
            .with_details("The descriptor was skipped; projects inheriting from it are treated as parent-less"),

        PomError::PropertyNotFound { property, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Define {property} in <properties> of this project or one of its parents"
            ))
            .with_details("Properties are looked up in the project first, then along its <parent> chain. Parents outside the scanned directory are not visible"),

        PomError::ProjectAttributeNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Use one of ${project.groupId}, ${project.artifactId}, ${project.version} or ${project.packaging}")
            .with_details("Only the project's own coordinates are available under the project. prefix"),

        PomError::PropertyCycle { chain, .. } => ErrorContext::new(error.clone())
            .with_suggestion("Break the cycle in the <parent> declarations or property definitions")
            .with_details(format!(
                "Resolution revisited {chain}. Properties and parents cannot refer back to themselves"
            )),

        PomError::XmlError(_) => ErrorContext::new(error.clone())
            .with_suggestion("Check the XML syntax: unclosed tags, bad entities or stray characters"),

        _ => ErrorContext::new(error.clone()),
    }
}
