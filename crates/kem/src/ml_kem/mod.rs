// kem/src/ml_kem/mod.rs

//! ML-KEM (FIPS 203) algorithm registry.
//!
//! Maps textual identifiers onto the three standardized parameter sets the
//! linked `ml-kem` crate provides. Resolution produces a [`KemContext`],
//! which carries the key lengths used to size and check generated keys.

mod context;

use core::fmt;
use core::str::FromStr;

use kemgen_params::pqc::ml_kem::{MlKemParams, ML_KEM_1024, ML_KEM_512, ML_KEM_768};

use crate::error::Error;

pub use self::context::KemContext;

/// Algorithm used when nothing else is configured.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::MlKem1024;

/// A KEM parameter set available from the linked primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// ML-KEM-512 (NIST security category 1)
    #[cfg_attr(feature = "serde", serde(rename = "ML-KEM-512"))]
    MlKem512,
    /// ML-KEM-768 (NIST security category 3)
    #[cfg_attr(feature = "serde", serde(rename = "ML-KEM-768"))]
    MlKem768,
    /// ML-KEM-1024 (NIST security category 5)
    #[cfg_attr(feature = "serde", serde(rename = "ML-KEM-1024"))]
    MlKem1024,
}

impl Algorithm {
    /// Every registered parameter set, smallest first.
    pub const ALL: [Algorithm; 3] = [Algorithm::MlKem512, Algorithm::MlKem768, Algorithm::MlKem1024];

    /// Published constants for this parameter set.
    pub fn params(self) -> MlKemParams {
        match self {
            Algorithm::MlKem512 => ML_KEM_512,
            Algorithm::MlKem768 => ML_KEM_768,
            Algorithm::MlKem1024 => ML_KEM_1024,
        }
    }

    /// Canonical FIPS 203 name, e.g. `ML-KEM-1024`.
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Look up an identifier. Accepts the canonical name or its lowercase form.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == identifier || alg.name().to_ascii_lowercase() == identifier)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| Error::UnknownAlgorithm {
            identifier: s.to_string(),
        })
    }
}
