//! # kemgen
//!
//! Generates an ML-KEM key pair, persists both halves as raw binary files and
//! prints them as hex for inspection.
//!
//! ## Pipeline
//!
//! 1. Resolve the configured identifier to a [`kem::KemContext`].
//! 2. Generate a key pair sized to that context.
//! 3. Write `public_key.bin` and `secret_key.bin`.
//! 4. Print both keys as uppercase hex, 16 bytes per line.
//!
//! Every stage returns a [`Result`]; only the binary turns an error into a
//! process exit.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kemgen-api`]: error taxonomy, key containers, `KeyGenerator` trait
//! - [`kemgen-params`]: published ML-KEM constants
//! - [`kemgen-kem`]: algorithm registry and key generation over `ml-kem`
//! - [`kemgen-utils`]: hex rendering

pub use kemgen_api as api;
pub use kemgen_kem as kem;
pub use kemgen_params as params;
pub use kemgen_utils as utils;

pub mod config;
pub mod persist;
pub mod pipeline;
pub mod report;

pub use api::{Error, Result};
pub use config::KeygenConfig;
pub use pipeline::{run, run_with_rng, KeygenOutcome};

/// Common imports for kemgen users
pub mod prelude {
    pub use crate::api::{Error, KeyGenerator, KeyPair, PublicKey, Result, SecretKey};
    pub use crate::config::KeygenConfig;
    pub use crate::kem::{Algorithm, KemContext};
    pub use crate::pipeline::{run, run_with_rng, KeygenOutcome};
}
