//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures of the persistence port while reading or writing a blob.
///
/// Each variant carries the blob key so the message points at the piece of
/// state that could not be accessed.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
/// use std::io::{self, ErrorKind};
///
/// let error = StorageError::Write {
///     key: "emotion_records".to_string(),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("emotion_records"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a blob failed for a reason other than it being absent.
    #[error("Failed to read stored data '{key}': {source}")]
    Read {
        /// The blob key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing a blob failed.
    #[error("Failed to write stored data '{key}': {source}. Please check disk space and permissions of the data directory.")]
    Write {
        /// The blob key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Removing a blob failed.
    #[error("Failed to remove stored data '{key}': {source}")]
    Remove {
        /// The blob key
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The key cannot be mapped to a storage location.
    #[error("Invalid storage key '{0}': keys may only contain letters, digits, '_' and '-'")]
    InvalidKey(String),
}

/// Represents errors that can occur when locking the data directory.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/data/LOCK"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the data directory is already locked by another process.
    #[error("Data directory is in use by another moodlog process: {path}. Please wait for the other process to finish.")]
    FileBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Validation("Intensity must be between 1 and 5".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Validation error: Intensity must be between 1 and 5"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or unloadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from I/O outside of blob storage (directory setup and the like).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// User input that violates a record invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The emotion catalog violates one of its invariants.
    #[error("Emotion catalog error: {0}")]
    Catalog(String),

    /// A value could not be serialized to or parsed from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persistence port failures.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Data directory locking failures.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let catalog_error = AppError::Catalog("duplicate name".to_string());
        assert_eq!(
            format!("{}", catalog_error),
            "Emotion catalog error: duplicate name"
        );

        let lock_error = LockError::FileBusy {
            path: PathBuf::from("/data/LOCK"),
        };
        let app_error = AppError::Lock(lock_error);
        assert!(format!("{}", app_error).contains("File locking error"));
        assert!(format!("{}", app_error).contains("/data/LOCK"));
    }

    #[test]
    fn test_storage_error_conversion() {
        let storage_error = StorageError::InvalidKey("../escape".to_string());
        let app_error: AppError = storage_error.into();

        match app_error {
            AppError::Storage(StorageError::InvalidKey(key)) => assert_eq!(key, "../escape"),
            _ => panic!("Expected AppError::Storage variant"),
        }
    }

    #[test]
    fn test_serialization_error_conversion() {
        let parse_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let app_error: AppError = parse_error.into();
        assert!(format!("{}", app_error).starts_with("Serialization error"));
    }
}
