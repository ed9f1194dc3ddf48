//! Hex decoding of input blocks and text rendering of round states.

use core::fmt::Write;

use crate::block::{block_from_slice, Block};
use crate::error::{Error, Result};

/// Decodes exactly 32 hex digits into a [`Block`].
///
/// Surrounding whitespace is ignored and digits are case-insensitive. Errors
/// carry `field` so callers can tell the plaintext from the key.
pub fn decode_block(field: &'static str, text: &str) -> Result<Block> {
    let digits = text.trim();
    let bytes = hex::decode(digits).map_err(|_| {
        first_invalid_character(field, digits).unwrap_or(Error::OddHexLength {
            field,
            digits: digits.chars().count(),
        })
    })?;
    block_from_slice(field, &bytes)
}

fn first_invalid_character(field: &'static str, digits: &str) -> Option<Error> {
    digits
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_hexdigit())
        .map(|(index, character)| Error::InvalidEncoding {
            field,
            index,
            character,
        })
}

/// Renders a block as space-separated two-digit lowercase hex.
pub fn format_block(state: &Block) -> String {
    let mut out = String::with_capacity(state.len() * 3);
    for (i, byte) in state.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Renders one round in the trace format: a `Round <n>:` header, the state
/// bytes, and a blank line.
pub fn format_round(round: usize, state: &Block) -> String {
    format!("Round {round}:\n{}\n\n", format_block(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_case_with_whitespace() {
        let block = decode_block("plaintext", "  00112233445566778899AaBbCcDdEeFf\n").unwrap();
        assert_eq!(block[0], 0x00);
        assert_eq!(block[10], 0xaa);
        assert_eq!(block[15], 0xff);
    }

    #[test]
    fn reports_position_of_bad_character() {
        let err = decode_block("key", "000102030405060708090a0b0c0d0g0f").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEncoding {
                field: "key",
                index: 29,
                character: 'g',
            }
        );
    }

    #[test]
    fn bad_character_wins_over_odd_length() {
        let err = decode_block("key", "0z1").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding {
                index: 1,
                character: 'z',
                ..
            }
        ));
    }

    #[test]
    fn non_ascii_position_counts_characters() {
        let err = decode_block("key", "00é1").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding {
                index: 2,
                character: 'é',
                ..
            }
        ));
    }

    #[test]
    fn odd_digit_count_is_reported() {
        let err = decode_block("plaintext", "000").unwrap_err();
        assert_eq!(
            err,
            Error::OddHexLength {
                field: "plaintext",
                digits: 3,
            }
        );
    }

    #[test]
    fn wrong_byte_count_is_reported() {
        let err = decode_block("plaintext", "0011").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                field: "plaintext",
                expected: 16,
                actual: 2,
            }
        );
        assert!(matches!(
            decode_block("plaintext", &"ab".repeat(17)),
            Err(Error::InvalidLength { actual: 17, .. })
        ));
    }

    #[test]
    fn round_rendering() {
        let state: Block = core::array::from_fn(|i| (i * 17) as u8);
        assert_eq!(
            format_block(&state),
            "00 11 22 33 44 55 66 77 88 99 aa bb cc dd ee ff"
        );
        assert_eq!(
            format_round(3, &state),
            "Round 3:\n00 11 22 33 44 55 66 77 88 99 aa bb cc dd ee ff\n\n"
        );
    }
}
