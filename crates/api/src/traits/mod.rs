//! Traits shared across the kemgen crates

pub mod keygen;

pub use keygen::KeyGenerator;
