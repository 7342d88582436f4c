//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are hard failures: the offending operation is aborted and nothing
/// was changed. Expected, recoverable outcomes (such as using an item in the
/// wrong state) are reported as data instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g. empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A lifecycle rule or aggregate invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced entity is not where the operation expected it.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation would duplicate something that must be unique.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The requested operation has no rule for the given inputs.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// The bare reason, without the category prefix added by `Display`.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::InvariantViolation(msg)
            | DomainError::InvalidId(msg)
            | DomainError::NotFound(msg)
            | DomainError::Conflict(msg)
            | DomainError::Unsupported(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let err = DomainError::not_found("item not in inventory");
        assert_eq!(err.to_string(), "not found: item not in inventory");
    }

    #[test]
    fn reason_strips_category() {
        let err = DomainError::invariant("item already equipped");
        assert_eq!(err.reason(), "item already equipped");
    }
}
