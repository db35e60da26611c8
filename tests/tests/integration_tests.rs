//! End-to-end runs of the key generation pipeline

use std::fs;

use kemgen::prelude::*;
use kemgen::utils::{BYTES_PER_LINE, CONTINUATION_INDENT};
use kemgen_params::pqc::ml_kem::ML_KEM_1024;
use kemgen_tests::{dir_entries, scratch_config, FailingRng};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn test_default_run_produces_ml_kem_1024_files() {
    let (dir, config) = scratch_config("ML-KEM-1024");
    let mut out = Vec::new();

    let outcome = run(&config, &mut out).unwrap();

    assert_eq!(outcome.algorithm, "ML-KEM-1024");
    assert_eq!(dir_entries(dir.path()), vec!["public_key.bin", "secret_key.bin"]);

    let pk = fs::read(dir.path().join("public_key.bin")).unwrap();
    let sk = fs::read(dir.path().join("secret_key.bin")).unwrap();
    assert_eq!(pk.len(), ML_KEM_1024.public_key_size);
    assert_eq!(sk.len(), ML_KEM_1024.secret_key_size);
    assert_eq!(pk, outcome.keypair.public_key().as_bytes());
    assert_eq!(sk, outcome.keypair.secret_key().as_bytes());
}

#[test]
fn test_two_runs_produce_different_keys() {
    let (_dir_a, config_a) = scratch_config("ML-KEM-1024");
    let (_dir_b, config_b) = scratch_config("ML-KEM-1024");

    let a = run(&config_a, Vec::new()).unwrap();
    let b = run(&config_b, Vec::new()).unwrap();

    assert_ne!(a.keypair.public_key(), b.keypair.public_key());
    assert_ne!(a.keypair.secret_key(), b.keypair.secret_key());
}

#[test]
fn test_alternate_identifiers() {
    for (id, pk_len, sk_len) in [("ML-KEM-512", 800, 1632), ("ml-kem-768", 1184, 2400)] {
        let (_dir, config) = scratch_config(id);
        let mut rng = ChaChaRng::seed_from_u64(3);

        let outcome = run_with_rng(&config, &mut rng, Vec::new()).unwrap();
        assert_eq!(fs::read(&outcome.public_key_path).unwrap().len(), pk_len);
        assert_eq!(fs::read(&outcome.secret_key_path).unwrap().len(), sk_len);
    }
}

#[test]
fn test_transcript_layout() {
    let (_dir, config) = scratch_config("ML-KEM-1024");
    let mut rng = ChaChaRng::seed_from_u64(9);
    let mut out = Vec::new();

    let outcome = run_with_rng(&config, &mut rng, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("=== Key generation ===\n[INFO] Using algorithm: ML-KEM-1024\n"));
    assert!(text.contains("[INFO] Keys generated:\nPublic key: "));
    assert!(text.contains("\nSecret key: "));
    assert!(text.contains(&format!("  - {}\n", outcome.public_key_path.display())));
    assert!(text.ends_with(&format!("  - {}\n", outcome.secret_key_path.display())));

    // First public key row is the first 16 bytes, uppercase.
    let first_row = kemgen::utils::rows(outcome.keypair.public_key().as_bytes()).remove(0);
    assert!(text.contains(&format!("Public key: {}\n{}", first_row, CONTINUATION_INDENT)));

    // 1568 = 98 full rows; the trailing break leaves one indent-only line.
    let pk_rows = ML_KEM_1024.public_key_size / BYTES_PER_LINE;
    let start = text.find("Public key: ").unwrap() + "Public key: ".len();
    let end = text.find("Secret key: ").unwrap();
    let lines: Vec<&str> = text[start..end].lines().map(str::trim_start).collect();

    assert_eq!(lines.len(), pk_rows + 1);
    assert!(lines[..pk_rows].iter().all(|l| l.len() == 2 * BYTES_PER_LINE));
    assert!(lines[pk_rows].is_empty());
    assert_eq!(
        lines.concat(),
        kemgen::utils::rows(outcome.keypair.public_key().as_bytes()).concat()
    );
}

#[test]
fn test_unsupported_algorithm_creates_no_files() {
    let (dir, config) = scratch_config("ML-KEM-4096");

    let err = run(&config, Vec::new()).unwrap_err();

    assert_eq!(
        err,
        Error::UnsupportedAlgorithm {
            identifier: "ML-KEM-4096".to_string()
        }
    );
    assert_ne!(err.exit_code(), 0);
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_unwritable_directory_fails_without_key_files() {
    let (dir, config) = scratch_config("ML-KEM-512");
    let config = config.with_output_dir(dir.path().join("does").join("not").join("exist"));

    let err = run(&config, Vec::new()).unwrap_err();

    assert!(matches!(err, Error::FileWriteError { .. }), "{:?}", err);
    assert_eq!(err.exit_code(), 4);
    assert!(!config.public_key_path().exists());
    assert!(!config.secret_key_path().exists());
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_secret_write_failure_leaves_only_public_key() {
    let (dir, config) = scratch_config("ML-KEM-1024");
    let config = config.with_file_names("public_key.bin", "missing/secret_key.bin");
    let mut out = Vec::new();

    let err = run(&config, &mut out).unwrap_err();

    match &err {
        Error::FileWriteError { path, .. } => assert_eq!(path, &config.secret_key_path()),
        other => panic!("expected FileWriteError, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 4);
    assert!(!config.secret_key_path().exists());

    // The public key written first is not cleaned up.
    assert_eq!(dir_entries(dir.path()), vec!["public_key.bin"]);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Files written"));
}

#[test]
fn test_entropy_failure_creates_no_files() {
    let (dir, config) = scratch_config("ML-KEM-1024");
    let mut out = Vec::new();

    let err = run_with_rng(&config, &mut FailingRng, &mut out).unwrap_err();

    assert!(matches!(err, Error::KeyGenerationFailed { algorithm: "ML-KEM-1024", .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(dir_entries(dir.path()).is_empty());

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Keys generated"));
}

#[test]
fn test_rerun_overwrites_previous_keys() {
    let (dir, config) = scratch_config("ML-KEM-512");

    let first = run_with_rng(&config, &mut ChaChaRng::seed_from_u64(1), Vec::new()).unwrap();
    let second = run_with_rng(&config, &mut ChaChaRng::seed_from_u64(2), Vec::new()).unwrap();

    assert_ne!(first.keypair, second.keypair);
    let pk = fs::read(dir.path().join("public_key.bin")).unwrap();
    assert_eq!(pk, second.keypair.public_key().as_bytes());
}
