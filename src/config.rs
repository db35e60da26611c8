//! Run configuration
//!
//! There is no command line, environment or file based configuration; the
//! binary always runs with [`KeygenConfig::default`]. The struct exists so the
//! orchestration receives its algorithm and output locations as values.

use std::path::PathBuf;

use kemgen_api::error::validate;
use kemgen_api::Result;
use kemgen_kem::DEFAULT_ALGORITHM;

/// Default public key file name
pub const PUBLIC_KEY_FILE: &str = "public_key.bin";

/// Default secret key file name
pub const SECRET_KEY_FILE: &str = "secret_key.bin";

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeygenConfig {
    /// KEM identifier, resolved at run time so unknown names surface as errors
    pub algorithm: String,

    /// Directory receiving both key files; empty means the working directory
    pub output_dir: PathBuf,

    /// File name of the public key inside `output_dir`
    pub public_key_file: String,

    /// File name of the secret key inside `output_dir`
    pub secret_key_file: String,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.name().to_string(),
            output_dir: PathBuf::new(),
            public_key_file: PUBLIC_KEY_FILE.to_string(),
            secret_key_file: SECRET_KEY_FILE.to_string(),
        }
    }
}

impl KeygenConfig {
    /// Use a different KEM identifier.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Write key files into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override both key file names.
    pub fn with_file_names(mut self, public: impl Into<String>, secret: impl Into<String>) -> Self {
        self.public_key_file = public.into();
        self.secret_key_file = secret.into();
        self
    }

    /// Full path of the public key file.
    pub fn public_key_path(&self) -> PathBuf {
        self.output_dir.join(&self.public_key_file)
    }

    /// Full path of the secret key file.
    pub fn secret_key_path(&self) -> PathBuf {
        self.output_dir.join(&self.secret_key_file)
    }

    /// Reject file names that would make the two outputs ambiguous.
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            !self.public_key_file.is_empty() && !self.secret_key_file.is_empty(),
            "key file name",
            "must not be empty",
        )?;
        validate::parameter(
            self.public_key_file != self.secret_key_file,
            "key file name",
            "public and secret key must be written to different files",
        )
    }
}
