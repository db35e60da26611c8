//! Property-based tests for the hex reporter

use kemgen_utils::{format_labeled, BYTES_PER_LINE, CONTINUATION_INDENT};
use proptest::prelude::*;

/// Byte strings spanning zero, partial and many full lines
fn key_like_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=4 * BYTES_PER_LINE + 7)
}

proptest! {
    #[test]
    fn breaks_after_every_sixteenth_byte(bytes in key_like_bytes()) {
        let dump = format_labeled("Key", &bytes);
        let body = dump.strip_prefix("Key: ").unwrap();

        prop_assert!(body.ends_with('\n'));
        prop_assert_eq!(body.matches('\n').count(), bytes.len() / BYTES_PER_LINE + 1);

        let lines: Vec<&str> = body.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let hex = if i == 0 { *line } else { line.strip_prefix(CONTINUATION_INDENT).unwrap() };
            let expected = (bytes.len() - (i * BYTES_PER_LINE).min(bytes.len())).min(BYTES_PER_LINE);
            prop_assert_eq!(hex.len(), expected * 2);
        }
    }

    #[test]
    fn every_byte_is_two_uppercase_digits(bytes in key_like_bytes()) {
        let dump = format_labeled("Key", &bytes);
        let digits: String = dump
            .strip_prefix("Key: ")
            .unwrap()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        prop_assert_eq!(digits.len(), bytes.len() * 2);
        prop_assert!(digits.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
        for (i, b) in bytes.iter().enumerate() {
            prop_assert_eq!(&digits[2 * i..2 * i + 2], format!("{:02X}", b));
        }
    }

    #[test]
    fn output_is_pure(bytes in key_like_bytes(), label in "[A-Za-z ]{1,16}") {
        let dump = format_labeled(&label, &bytes);
        let prefix = format!("{}: ", label);

        prop_assert_eq!(&dump, &format_labeled(&label, &bytes));
        prop_assert!(dump.starts_with(&prefix), "dump lacks label prefix {:?}", prefix);
    }
}
