//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, failed lookups). Every variant propagates to the immediate
/// caller; nothing in the domain layer swallows these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a required builder field is missing).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was not strictly positive.
    #[error("invalid identifier {field}: id must be > 0 (got {value})")]
    InvalidId { field: &'static str, value: i32 },

    /// A construction precondition did not hold (data-integrity fault).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A collaborator backing a lookup could not be reached.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// A value of one variant was narrowed to a different variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(field: &'static str, value: i32) -> Self {
        Self::InvalidId { field, value }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// The offending field of an [`DomainError::InvalidId`], if this is one.
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidId { field, .. } => Some(*field),
            _ => None,
        }
    }
}
