//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while reading or writing the backing store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but cannot be parsed
    #[error("Store file is corrupt: {0}")]
    Corrupt(String),

    /// The store file was written by an unknown format version
    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors surfaced by the assistant intent layer.
///
/// Validation and not-found variants are caught by the command loop and
/// printed as one-line messages; storage errors propagate to the process
/// boundary.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A phone or birthday argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists under the given name
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// The record has no phone matching the request
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// The record exists but holds no phone numbers at all
    #[error("Contact {0} has no phone numbers")]
    NoPhones(String),

    /// Persisting the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
