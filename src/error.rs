//! Error types for schema validation.

use serde::Serialize;
use thiserror::Error;

/// Failure description produced when a value does not match a schema.
///
/// Always carried inside a `Result`, never panicked. Composite object
/// failures concatenate one `property [name]: ...` fragment per failing
/// property into a single description.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{description}")]
pub struct ValidationError {
    /// Human-readable description of what failed.
    pub description: String,
}

impl ValidationError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
