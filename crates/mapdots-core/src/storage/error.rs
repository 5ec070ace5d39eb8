//! Storage error handling
//!
//! Typed errors for reading and writing the dots slot. The store catches
//! all of these; they surface only in logs and in direct adapter use.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving dots
#[derive(Error, Debug)]
pub enum StorageError {
    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error("Storage full or quota exceeded while writing to '{path}'")]
    QuotaExceeded {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the slot
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the slot
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Payload is not a valid dots array
    #[error("Malformed dots payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload holds two records with the same id
    #[error("Malformed dots payload: duplicate id '{0}'")]
    DuplicateId(String),

    /// In-memory slot refused the write
    #[error("Slot '{key}' rejected the write: quota exceeded")]
    SlotFull { key: String },
}

impl StorageError {
    /// Create a read error from an I/O error with path context
    pub fn from_read(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ => StorageError::ReadError {
                path,
                source: error,
            },
        }
    }

    /// Create a write error from an I/O error with path context
    ///
    /// Classifies the error based on its kind (permission, disk full, etc.)
    pub fn from_write(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_quota_error(&error) => StorageError::QuotaExceeded {
                path,
                source: error,
            },
            _ => StorageError::WriteError {
                path,
                source: error,
            },
        }
    }

    /// Whether the stored payload itself is bad (as opposed to the medium)
    pub fn is_malformed(&self) -> bool {
        matches!(self, StorageError::Json(_) | StorageError::DuplicateId(_))
    }
}

/// Check if an I/O error indicates a full disk or exhausted quota
fn is_quota_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
