//! Error types for corpus loading and queries.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::structure::StructureIssue;

/// Errors that can occur while loading the corpus document.
///
/// Any of these is fatal: no query can run without a loaded corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the corpus document.
    #[error("failed to read corpus document {path}: {source}")]
    ReadFile {
        /// Path to the document that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to read the corpus document from a stream.
    #[error("failed to read corpus document: {0}")]
    Io(#[from] io::Error),

    /// The document is not a well-formed corpus document.
    #[error("failed to parse corpus document: {source}")]
    Parse {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The document parsed but its chapters or verses cannot be indexed.
    #[error("malformed corpus document: {message}")]
    Structure {
        /// Description of the offending chapter or verse.
        message: String,
    },

    /// Strict loading rejected a corpus that violates the structural invariants.
    #[error("corpus failed structural validation ({} issues): {}", issues.len(), summarize(issues))]
    Invalid {
        /// Every violated invariant.
        issues: Vec<StructureIssue>,
    },
}

/// Joins the first few issues into one line for the error message.
fn summarize(issues: &[StructureIssue]) -> String {
    const SHOWN: usize = 3;
    let mut parts: Vec<String> = issues.iter().take(SHOWN).map(ToString::to_string).collect();
    if issues.len() > SHOWN {
        parts.push(format!("and {} more", issues.len() - SHOWN));
    }
    parts.join("; ")
}

/// Errors returned by query operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A parameter failed its precondition. Raised before any corpus scan.
    #[error("invalid {parameter}: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What was wrong and what the valid range is.
        message: String,
    },

    /// A validated lookup found nothing. Indicates a corrupt corpus.
    #[error("not found: {what}")]
    NotFound {
        /// The entity that was looked up.
        what: String,
    },
}

impl QueryError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Creates a `NotFound` error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if this error is a failed precondition.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
