//! Key containers produced by key generation
//!
//! Both containers own a dynamically sized byte buffer. [`SecretKey`] is
//! zeroed when dropped and never prints its contents.

use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Wrapper for public key data
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    data: Vec<u8>,
}

impl PublicKey {
    /// Take ownership of an encoded public key
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a new public key by copying a byte slice
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bytes)", self.data.len())
    }
}

/// Wrapper for secret key data, securely zeroed when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    data: Vec<u8>,
}

impl SecretKey {
    /// Take ownership of an encoded secret key
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a new secret key by copying a byte slice
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.data.as_slice().ct_eq(other.data.as_slice()).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes)[REDACTED]", self.data.len())
    }
}

/// A public/secret key pair produced by one generation call
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyPair {
    public: PublicKey,
    secret: SecretKey,
}

impl KeyPair {
    /// Assemble a key pair from its halves
    pub fn new(public: PublicKey, secret: SecretKey) -> Self {
        Self { public, secret }
    }

    /// The public (encapsulation) key
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret (decapsulation) key
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Split into the public and secret halves
    pub fn into_parts(self) -> (PublicKey, SecretKey) {
        (self.public, self.secret)
    }
}
