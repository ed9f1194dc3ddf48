//! AES-128 key expansion.

use crate::gf;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::SBox;

/// Number of round constants consumed by AES-128.
pub const ROUND_CONSTANT_COUNT: usize = 10;

const WORDS: usize = 4 * ROUND_KEY_COUNT;

/// Round constants `RC[0] = 1`, `RC[i] = 2 * RC[i - 1]`.
pub fn round_constants() -> [u8; ROUND_CONSTANT_COUNT] {
    let mut rc = [0u8; ROUND_CONSTANT_COUNT];
    rc[0] = 0x01;
    for i in 1..ROUND_CONSTANT_COUNT {
        rc[i] = gf::mult(0x02, rc[i - 1]);
    }
    rc
}

fn rot_word(word: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = word;
    [a1, a2, a3, a0]
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(sbox: &SBox, key: &Aes128Key) -> RoundKeys {
    let _span = tracing::trace_span!("expand_key").entered();
    let rc = round_constants();

    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sbox.apply_word(rot_word(temp));
            temp[0] ^= rc[i / 4 - 1];
        }
        for (j, byte) in temp.iter().enumerate() {
            w[i][j] = w[i - 4][j] ^ byte;
        }
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverse::InverseTable;

    fn hex16(text: &str) -> [u8; 16] {
        crate::encoding::decode_block("test", text).unwrap()
    }

    fn schedule(key_hex: &str) -> RoundKeys {
        let sbox = SBox::new(&InverseTable::new());
        expand_key(&sbox, &Aes128Key::from_hex(key_hex).unwrap())
    }

    #[test]
    fn round_constants_follow_doubling() {
        assert_eq!(
            round_constants(),
            [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
        );
    }

    #[test]
    fn rot_word_moves_first_byte_last() {
        assert_eq!(rot_word([0x09, 0xcf, 0x4f, 0x3c]), [0xcf, 0x4f, 0x3c, 0x09]);
    }

    #[test]
    fn fips_197_appendix_a1() {
        let keys = schedule("2b7e151628aed2a6abf7158809cf4f3c");
        assert_eq!(*keys.get(0), hex16("2b7e151628aed2a6abf7158809cf4f3c"));
        assert_eq!(*keys.get(1), hex16("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(*keys.get(10), hex16("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    }

    #[test]
    fn all_zero_key() {
        let keys = schedule("00000000000000000000000000000000");
        assert_eq!(*keys.get(1), hex16("62636363626363636263636362636363"));
        assert_eq!(*keys.get(10), hex16("b4ef5bcb3e92e21123e951cf6f8f188e"));
    }

    #[test]
    fn schedule_starts_with_the_key_and_spans_176_bytes() {
        let keys = schedule("000102030405060708090a0b0c0d0e0f");
        let bytes = keys.to_bytes();
        assert_eq!(bytes.len(), 176);
        assert_eq!(bytes[..16], hex16("000102030405060708090a0b0c0d0e0f"));
        assert_eq!(bytes[160..], hex16("13111d7fe3944a17f307a78b4d2b30c5"));
    }
}
