//! Key Encapsulation Mechanism selection and key generation
//!
//! This crate resolves a KEM identifier to a [`KemContext`] and generates
//! key pairs through the RustCrypto `ml-kem` implementation of FIPS 203.
//! The lattice arithmetic lives entirely in `ml-kem`; this crate only sizes,
//! seeds, and validates.

pub mod error;
pub mod ml_kem;

// Re-exports
pub use ml_kem::{Algorithm, KemContext, DEFAULT_ALGORITHM};
