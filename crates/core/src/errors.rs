//! Core error types for Skylet.
//!
//! Storage-specific failures (file I/O, lock poisoning in an adapter) are
//! converted to [`StorageError`] by the adapter that hit them, keeping this
//! type independent of any one persistence backend.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the banking store and its collaborators.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to decode persisted data: {0}")]
    Decode(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account '{0}' not found")]
    AccountNotFound(String),

    #[error("No current account is available")]
    NoCurrentAccount,

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for key-value persistence.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading from the backing medium failed.
    #[error("Failed to read storage: {0}")]
    ReadFailed(String),

    /// Writing to the backing medium failed (quota, permissions, full disk).
    #[error("Failed to write storage: {0}")]
    WriteFailed(String),

    /// The backing document exists but is not in the expected layout.
    #[error("Storage document is corrupt: {0}")]
    Corrupt(String),

    /// An internal lock guarding the medium was poisoned.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
}
