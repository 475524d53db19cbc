//! Error types for the spendbook core.

use crate::validate::{FieldError, FormErrors};

/// All errors that can occur when using the spendbook core.
#[derive(Debug, thiserror::Error)]
pub enum SpendbookError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend failed to read or write.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// One or more transaction fields were rejected by validation.
    #[error("validation failed: {0}")]
    Validation(FormErrors),

    /// The budget cap candidate was rejected.
    #[error("budget cap rejected: {0}")]
    BudgetCap(FieldError),

    /// Import payload was valid JSON but not an array of records.
    #[error("import payload must be an array of transactions")]
    ImportNotArray,

    /// An import record failed the shallow shape check.
    #[error("import record {index} has a missing or malformed `{field}` field")]
    ImportShape {
        /// Zero-based position of the offending record in the payload.
        index: usize,
        /// Name of the field that failed the check.
        field: &'static str,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, SpendbookError>;
