//! Hex dump rendering for console inspection of key material
//!
//! Output is uppercase, unseparated, and wrapped after every
//! [`BYTES_PER_LINE`] bytes. A labeled dump looks like:
//!
//! ```text
//! Public key: 000102030405060708090A0B0C0D0E0F
//!          101112
//! ```

/// Bytes rendered on one line.
pub const BYTES_PER_LINE: usize = 16;

/// Indentation written after each line break of a labeled dump.
pub const CONTINUATION_INDENT: &str = "         ";

/// Render `bytes` as rows of at most [`BYTES_PER_LINE`] bytes each,
/// two uppercase hex digits per byte.
pub fn rows(bytes: &[u8]) -> Vec<String> {
    bytes.chunks(BYTES_PER_LINE).map(::hex::encode_upper).collect()
}

/// Render `bytes` under `label`.
///
/// A line break (followed by [`CONTINUATION_INDENT`]) is inserted after
/// bytes 16, 32, 48, ... counted from the first byte of this call, and the
/// whole dump ends with a newline. When the length is a multiple of 16 the
/// final break is kept, so the dump ends with an indented empty line.
pub fn format_labeled(label: &str, bytes: &[u8]) -> String {
    let lines = bytes.len() / BYTES_PER_LINE;
    let mut out = String::with_capacity(label.len() + 3 + bytes.len() * 2 + lines * (CONTINUATION_INDENT.len() + 1));
    out.push_str(label);
    out.push_str(": ");

    for row in rows(bytes) {
        out.push_str(&row);
        if row.len() == 2 * BYTES_PER_LINE {
            out.push('\n');
            out.push_str(CONTINUATION_INDENT);
        }
    }

    out.push('\n');
    out
}
