//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, overdraw, missing
/// records). Absence on plain lookups is expressed as `Option`/`bool` at the
/// service boundary; `NotFound` is reserved for operations that cannot
/// proceed without the record, such as recording a movement against a
/// product that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank required field, negative amount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A stock withdrawal asked for more than is on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// An identifier was invalid (e.g. parse failure at the HTTP boundary).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A record the operation depends on was not found.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A uniqueness conflict (e.g. duplicate id on insert).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Login check failed.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
