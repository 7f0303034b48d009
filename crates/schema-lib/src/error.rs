// Error types for callers that turn a failed validation into an error

use crate::explanation::{Diagnostic, Failure};
use thiserror::Error;

/// Result type for checked validation and narrowing
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors produced when a caller decides a failed validation is fatal.
///
/// Validators themselves never return this; it is what [`crate::ValidatorExt::check`]
/// and [`crate::ValidatorExt::narrow`] build from an invalid [`Failure`].
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The value does not have the expected shape
    #[error("{explanation}")]
    Invalid {
        /// The fully rendered explanation
        explanation: String,
        /// Leaf failures with their paths
        diagnostics: Vec<Diagnostic>,
    },

    /// The value has the expected shape but could not be deserialized into
    /// the requested Rust type
    #[error("value matched the schema but could not be deserialized: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl SchemaError {
    /// Build an `Invalid` error, rendering the failure once.
    pub fn from_failure(failure: &Failure<'_>) -> Self {
        SchemaError::Invalid {
            explanation: failure.render(""),
            diagnostics: failure.diagnostics(),
        }
    }

    /// The rendered explanation, if this is a shape error.
    pub fn explanation(&self) -> Option<&str> {
        match self {
            SchemaError::Invalid { explanation, .. } => Some(explanation),
            SchemaError::Deserialize(_) => None,
        }
    }

    /// The leaf diagnostics, empty unless this is a shape error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            SchemaError::Invalid { diagnostics, .. } => diagnostics,
            SchemaError::Deserialize(_) => &[],
        }
    }
}
