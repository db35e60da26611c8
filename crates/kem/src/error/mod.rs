//! Error handling for KEM operations

use core::fmt;
use kemgen_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Identifier not present in the registry
    UnknownAlgorithm { identifier: String },

    /// KEM-specific key generation failure
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// The random source refused to produce seed material
    Entropy {
        algorithm: &'static str,
        message: String,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlgorithm { identifier } => {
                write!(f, "Unknown KEM algorithm: {}", identifier)
            }
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Entropy { algorithm, message } => {
                write!(f, "Entropy source failed for {}: {}", algorithm, message)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownAlgorithm { identifier } => CoreError::UnsupportedAlgorithm { identifier },
            Error::KeyGeneration { algorithm, details } => {
                CoreError::key_generation(algorithm, details)
            }
            Error::Entropy { algorithm, message } => {
                CoreError::key_generation(algorithm, format!("entropy source failed: {}", message))
            }
            Error::InvalidKey { key_type, reason } => CoreError::InvalidParameter {
                context: key_type,
                message: reason.to_string(),
            },
        }
    }
}

pub mod validate;
