//! Error type definitions for key generation

use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// Primary error type for the key generation pipeline.
///
/// Every variant is fatal at the pipeline level; the binary maps each one to
/// a distinct non-zero exit status via [`Error::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested KEM identifier is not provided by the linked primitive
    #[error("unsupported KEM algorithm: {identifier}")]
    UnsupportedAlgorithm { identifier: String },

    /// The primitive could not produce a key pair
    #[error("key generation failed for {algorithm}: {details}")]
    KeyGenerationFailed {
        algorithm: &'static str,
        details: String,
    },

    /// A key file could not be created or written
    #[error("failed to write {}: {message}", path.display())]
    FileWriteError { path: PathBuf, message: String },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for key generation operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedAlgorithm { .. } => 2,
            Self::KeyGenerationFailed { .. } => 3,
            Self::FileWriteError { .. } => 4,
            Self::InvalidLength { .. } | Self::InvalidParameter { .. } => 1,
        }
    }

    /// Build a [`Error::FileWriteError`] from an I/O failure on `path`.
    pub fn file_write(path: &Path, err: &std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Build a [`Error::KeyGenerationFailed`].
    pub fn key_generation(algorithm: &'static str, details: impl Into<String>) -> Self {
        Self::KeyGenerationFailed {
            algorithm,
            details: details.into(),
        }
    }
}
