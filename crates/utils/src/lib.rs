//! Utilities and helpers for kemgen

pub mod hex;

pub use crate::hex::{format_labeled, rows, BYTES_PER_LINE, CONTINUATION_INDENT};
