//! Constants for the ML-KEM key encapsulation mechanism (FIPS 203)

/// ML-KEM polynomial degree
pub const ML_KEM_N: usize = 256;

/// ML-KEM modulus
pub const ML_KEM_Q: u16 = 3329;

/// Size of each key-generation seed (`d` and `z`) in bytes
pub const ML_KEM_SEED_BYTES: usize = 32;

/// Size of the shared secret in bytes, common to all parameter sets
pub const ML_KEM_SS_BYTES: usize = 32;

/// Structure containing one ML-KEM parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKemParams {
    /// Canonical FIPS 203 name
    pub name: &'static str,

    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (module rank)
    pub k: usize,

    /// Noise distribution parameter for key generation
    pub eta1: u8,

    /// Noise distribution parameter for encryption
    pub eta2: u8,

    /// Compression bits for `u`
    pub du: usize,

    /// Compression bits for `v`
    pub dv: usize,

    /// Size of public (encapsulation) key in bytes
    pub public_key_size: usize,

    /// Size of secret (decapsulation) key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

impl MlKemParams {
    /// Encoded size of one polynomial vector of rank `k` (12 bits per coefficient)
    pub const fn polyvec_bytes(&self) -> usize {
        self.k * self.n * 12 / 8
    }
}

/// ML-KEM-512 parameters
pub const ML_KEM_512: MlKemParams = MlKemParams {
    name: "ML-KEM-512",
    n: ML_KEM_N,
    q: ML_KEM_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: ML_KEM_SS_BYTES,
};

/// ML-KEM-768 parameters
pub const ML_KEM_768: MlKemParams = MlKemParams {
    name: "ML-KEM-768",
    n: ML_KEM_N,
    q: ML_KEM_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: ML_KEM_SS_BYTES,
};

/// ML-KEM-1024 parameters
pub const ML_KEM_1024: MlKemParams = MlKemParams {
    name: "ML-KEM-1024",
    n: ML_KEM_N,
    q: ML_KEM_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: ML_KEM_SS_BYTES,
};
