//! Catalog error types

use thiserror::Error;

/// Errors surfaced by catalog queries and comment submission.
///
/// None of these are fatal: callers turn them into user-facing messages
/// (or HTTP status codes) and the catalog is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown (or unparsable) article reference
    #[error("Article not found: {0}")]
    NotFound(String),

    /// A required field was empty after trimming whitespace
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// An ingested payload could not be converted into a catalog record
    #[error("Malformed record {record}: {reason}")]
    Transport { record: String, reason: String },

    /// The seed data violates a catalog invariant
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    pub(crate) fn transport(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
