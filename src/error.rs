use thiserror::Error;

/// Unified error type for `hprs` operations.
///
/// Everything the crate can reject is malformed request input; estimation
/// itself is total over a parsed [`FeatureRecord`](crate::FeatureRecord).
#[derive(Debug, Error)]
pub enum HprsError {
    /// Raised when a required form field is absent from the submission.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// Raised when a form field cannot be parsed into its expected type.
    #[error("field `{field}` has value `{value}`, expected {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value as received.
        value: String,
        /// Human-readable description of the expected domain.
        expected: &'static str,
    },
}

impl HprsError {
    /// Helper for bubbling up missing fields from form parsing.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Helper to format an [`InvalidField`](HprsError::InvalidField) error.
    pub fn invalid(field: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            expected,
        }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, HprsError>;
