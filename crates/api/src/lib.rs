//! Public API traits and types for kemgen
//!
//! This crate provides the shared surface of the kemgen workspace: the error
//! taxonomy every stage reports through, the key containers produced by key
//! generation, and the [`KeyGenerator`] trait the pipeline is written against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::KeyGenerator;
pub use types::{KeyPair, PublicKey, SecretKey};
