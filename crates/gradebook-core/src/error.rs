//! Roster error types.
//!
//! These are the structured failures a caller can get back from the store,
//! the serializer, or record validation. None of them is fatal: the
//! presentation layer decides how to report each one.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A mutation would give two records the same student code.
    #[error("student code {0} already exists")]
    DuplicateCode(i32),

    /// The targeted student code is not in the roster.
    #[error("no student with code {0}")]
    NotFound(i32),

    /// A field is outside its documented range or cannot be stored.
    #[error("invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// Reading or writing the data file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    /// Returns `true` if the caller can fix the input and retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RosterError::DuplicateCode(_) | RosterError::InvalidField { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, RosterError>;
