//! Constant values for kemgen
//!
//! Published parameter-set constants. No code, no dependencies.

#![no_std]

pub mod pqc;
