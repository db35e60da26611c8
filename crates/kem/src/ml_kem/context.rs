//! Resolved ML-KEM context and key-pair generation

use kemgen_api::error::Result as ApiResult;
use kemgen_api::{KeyGenerator, KeyPair, PublicKey, SecretKey};
use kemgen_params::pqc::ml_kem::{MlKemParams, ML_KEM_SEED_BYTES};
use ml_kem::{EncodedSizeUser, KemCore, MlKem1024, MlKem512, MlKem768, B32};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::Algorithm;
use crate::error::{validate, Error, Result};

type Seed = Zeroizing<[u8; ML_KEM_SEED_BYTES]>;

/// A resolved KEM algorithm together with its published key lengths.
///
/// Obtained once per run from [`KemContext::from_identifier`] and immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KemContext {
    algorithm: Algorithm,
    params: MlKemParams,
}

impl KemContext {
    /// Build the context for a known algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            params: algorithm.params(),
        }
    }

    /// Resolve `identifier` against the registry.
    ///
    /// Fails with `UnsupportedAlgorithm` if the linked primitive does not
    /// provide it.
    pub fn from_identifier(identifier: &str) -> ApiResult<Self> {
        let algorithm: Algorithm = identifier.parse()?;
        let ctx = Self::new(algorithm);
        debug!(
            algorithm = ctx.name(),
            public_key_len = ctx.public_key_len(),
            secret_key_len = ctx.secret_key_len(),
            "resolved KEM context"
        );
        Ok(ctx)
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Published parameter constants of the selected algorithm.
    pub fn params(&self) -> &MlKemParams {
        &self.params
    }

    fn draw_seeds<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(Seed, Seed)> {
        let mut d: Seed = Zeroizing::new([0u8; ML_KEM_SEED_BYTES]);
        let mut z: Seed = Zeroizing::new([0u8; ML_KEM_SEED_BYTES]);

        for seed in [&mut d, &mut z] {
            rng.try_fill_bytes(&mut seed[..]).map_err(|e| Error::Entropy {
                algorithm: self.name(),
                message: e.to_string(),
            })?;
        }

        validate::key_generation(
            d.iter().any(|&b| b != 0) && z.iter().any(|&b| b != 0),
            self.name(),
            "random source returned an all-zero seed",
        )?;

        Ok((d, z))
    }
}

/// Run the primitive's seeded key generation and copy out the encodings.
fn derive<K: KemCore>(d: &Seed, z: &Seed) -> (PublicKey, SecretKey) {
    let mut d_arr: B32 = (**d).into();
    let mut z_arr: B32 = (**z).into();
    let (dk, ek) = K::generate_deterministic(&d_arr, &z_arr);
    d_arr.as_mut_slice().zeroize();
    z_arr.as_mut_slice().zeroize();

    let public = PublicKey::from_slice(ek.as_bytes().as_slice());

    let mut dk_bytes = dk.as_bytes();
    let secret = SecretKey::from_slice(dk_bytes.as_slice());
    dk_bytes.as_mut_slice().zeroize();

    (public, secret)
}

impl KeyGenerator for KemContext {
    fn name(&self) -> &'static str {
        self.params.name
    }

    fn public_key_len(&self) -> usize {
        self.params.public_key_size
    }

    fn secret_key_len(&self) -> usize {
        self.params.secret_key_size
    }

    fn generate_keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        let (d, z) = self.draw_seeds(rng)?;

        let (public, secret) = match self.algorithm {
            Algorithm::MlKem512 => derive::<MlKem512>(&d, &z),
            Algorithm::MlKem768 => derive::<MlKem768>(&d, &z),
            Algorithm::MlKem1024 => derive::<MlKem1024>(&d, &z),
        };

        validate::length("public key", public.len(), self.public_key_len())?;
        validate::length("secret key", secret.len(), self.secret_key_len())?;
        validate::key(
            public.as_bytes().iter().any(|&b| b != 0),
            "public",
            "generated public key is all zeros",
        )?;

        debug!(algorithm = self.name(), "generated key pair");
        Ok(KeyPair::new(public, secret))
    }
}
