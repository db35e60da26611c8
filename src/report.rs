//! Console transcript of a run
//!
//! Purely observational. Write failures on the sink are ignored so a closed
//! stdout never turns a successful key generation into an error.

use std::fmt;
use std::io::Write;
use std::path::Path;

use kemgen_api::KeyPair;
use kemgen_utils::format_labeled;

/// Label used for the public key dump
pub const PUBLIC_KEY_LABEL: &str = "Public key";

/// Label used for the secret key dump
pub const SECRET_KEY_LABEL: &str = "Secret key";

/// Writes status lines and hex dumps to a sink, normally stdout.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Report into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(args);
        let _ = self.out.write_all(b"\n");
    }

    /// Opening banner.
    pub fn banner(&mut self) {
        self.line(format_args!("=== Key generation ==="));
    }

    /// Announce the resolved algorithm.
    pub fn algorithm(&mut self, name: &str) {
        self.line(format_args!("[INFO] Using algorithm: {}", name));
    }

    /// Hex dump of both halves of `pair`.
    pub fn keys(&mut self, pair: &KeyPair) {
        self.line(format_args!("[INFO] Keys generated:"));
        let _ = self
            .out
            .write_all(format_labeled(PUBLIC_KEY_LABEL, pair.public_key().as_bytes()).as_bytes());
        let _ = self
            .out
            .write_all(format_labeled(SECRET_KEY_LABEL, pair.secret_key().as_bytes()).as_bytes());
    }

    /// List the files written by this run.
    pub fn files(&mut self, paths: &[&Path]) {
        self.line(format_args!("[INFO] Files written:"));
        for path in paths {
            self.line(format_args!("  - {}", path.display()));
        }
        let _ = self.out.flush();
    }

    /// Give the sink back.
    pub fn into_inner(self) -> W {
        self.out
    }
}
