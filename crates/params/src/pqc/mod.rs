//! Constants for post-quantum algorithms

pub mod ml_kem;
