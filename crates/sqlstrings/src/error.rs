//! Error types for sqlstrings

use thiserror::Error;

/// Result type alias for statement building
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building a statement or reading a literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Input shape rejected before any SQL is produced
    #[error("Validation error: {0}")]
    Validation(String),

    /// A table, column or procedure name is not a valid identifier
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// Text could not be read back as a SQL literal
    #[error("Literal error: {0}")]
    Literal(String),
}

impl SqlError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an identifier error for `name`
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a literal parse error
    pub fn literal(message: impl Into<String>) -> Self {
        Self::Literal(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }
}
