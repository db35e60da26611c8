//! Single-pass key generation pipeline
//!
//! Selector, generator, persister and reporter run strictly in that order.
//! The first failing stage ends the run; nothing is retried and nothing
//! already written is rolled back.

use std::io::Write;
use std::path::PathBuf;

use kemgen_api::error::validate;
use kemgen_api::{KeyGenerator, KeyPair, Result};
use kemgen_kem::KemContext;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::config::KeygenConfig;
use crate::persist;
use crate::report::Reporter;

/// What a successful run produced.
#[derive(Debug)]
pub struct KeygenOutcome {
    /// Canonical name of the algorithm used
    pub algorithm: &'static str,
    /// The generated key pair, identical to the bytes on disk
    pub keypair: KeyPair,
    /// Where the public key was written
    pub public_key_path: PathBuf,
    /// Where the secret key was written
    pub secret_key_path: PathBuf,
}

/// Run the pipeline with the operating system's random source.
pub fn run<W: Write>(config: &KeygenConfig, out: W) -> Result<KeygenOutcome> {
    run_with_rng(config, &mut OsRng, out)
}

/// Run the pipeline with a caller-supplied random source.
pub fn run_with_rng<R, W>(config: &KeygenConfig, rng: &mut R, out: W) -> Result<KeygenOutcome>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    config.validate()?;

    let mut reporter = Reporter::new(out);
    reporter.banner();

    let context = KemContext::from_identifier(&config.algorithm)?;
    reporter.algorithm(context.name());

    generate_and_persist(&context, config, rng, &mut reporter)
}

/// Generate, persist, then report, against any [`KeyGenerator`].
pub fn generate_and_persist<G, R, W>(
    generator: &G,
    config: &KeygenConfig,
    rng: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<KeygenOutcome>
where
    G: KeyGenerator,
    R: CryptoRng + RngCore,
    W: Write,
{
    let keypair = generator.generate_keypair(rng)?;

    // Nothing is written or printed unless both buffers match the context.
    validate::length("public key", keypair.public_key().len(), generator.public_key_len())?;
    validate::length("secret key", keypair.secret_key().len(), generator.secret_key_len())?;

    let public_key_path = config.public_key_path();
    let secret_key_path = config.secret_key_path();

    persist::write_key_file(&public_key_path, keypair.public_key().as_bytes())?;
    persist::write_secret_key_file(&secret_key_path, keypair.secret_key().as_bytes())?;

    reporter.keys(&keypair);
    reporter.files(&[public_key_path.as_path(), secret_key_path.as_path()]);

    debug!(algorithm = generator.name(), "key generation run complete");

    Ok(KeygenOutcome {
        algorithm: generator.name(),
        keypair,
        public_key_path,
        secret_key_path,
    })
}
