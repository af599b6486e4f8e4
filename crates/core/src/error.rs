//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (argument
/// validation, uniqueness, existence). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A required argument was missing or invalid.
    #[error("bad arguments: {0}")]
    BadArguments(String),

    /// An add attempted to reuse an identifier already in the store.
    #[error("id {0} already exists")]
    DuplicateId(String),

    /// An update/delete referenced an identifier with no matching record.
    #[error("no record found with id {0}")]
    NoRecordFound(String),

    /// The store lock was poisoned by a panicking writer.
    #[error("repository lock poisoned")]
    LockPoisoned,
}

impl InventoryError {
    pub fn bad_arguments(msg: impl Into<String>) -> Self {
        Self::BadArguments(msg.into())
    }

    pub fn duplicate_id(id: impl core::fmt::Display) -> Self {
        Self::DuplicateId(id.to_string())
    }

    pub fn no_record_found(id: impl core::fmt::Display) -> Self {
        Self::NoRecordFound(id.to_string())
    }
}
