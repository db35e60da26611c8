// File: crates/api/src/traits/keygen.rs

//! Trait definition for KEM key-pair generation
//!
//! A [`KeyGenerator`] is a resolved algorithm context: it knows the exact
//! public and secret key lengths of its parameter set and can fill a
//! [`KeyPair`] of exactly those lengths.

use crate::types::KeyPair;
use crate::Result;
use rand::{CryptoRng, RngCore};

/// Trait for a KEM context capable of generating key pairs.
///
/// # Contract
///
/// A successful [`generate_keypair`](KeyGenerator::generate_keypair) returns
/// a pair whose public key is exactly [`public_key_len`](KeyGenerator::public_key_len)
/// bytes and whose secret key is exactly [`secret_key_len`](KeyGenerator::secret_key_len)
/// bytes. Generation is all-or-nothing; there is no partially filled result.
pub trait KeyGenerator {
    /// Returns the canonical algorithm name.
    fn name(&self) -> &'static str;

    /// Required public key length in bytes.
    fn public_key_len(&self) -> usize;

    /// Required secret key length in bytes.
    fn secret_key_len(&self) -> usize;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - Must report an entropy failure as an error rather than panic.
    fn generate_keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<KeyPair>;
}
