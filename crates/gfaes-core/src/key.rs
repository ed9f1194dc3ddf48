//! Key types for AES-128.

use core::str::FromStr;

use crate::block::{block_from_slice, Block, BLOCK_LEN};
use crate::encoding::decode_block;
use crate::error::Error;

/// Number of round keys in an AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// Length of the flattened AES-128 key schedule in bytes.
pub const SCHEDULE_LEN: usize = ROUND_KEY_COUNT * BLOCK_LEN;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Parses a key from 32 hex digits.
    pub fn from_hex(text: &str) -> crate::Result<Self> {
        decode_block("key", text).map(Self)
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        block_from_slice("key", value).map(Self)
    }
}

impl FromStr for Aes128Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_LEN] {
        let mut out = [0u8; SCHEDULE_LEN];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_LEN).zip(self.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_keys() {
        let key: Aes128Key = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        assert_eq!(key.0, core::array::from_fn(|i| i as u8));
    }

    #[test]
    fn rejects_short_slices() {
        let err = Aes128Key::try_from(&[0u8; 24][..]).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { field: "key", actual: 24, .. }));
    }

    #[test]
    fn flattening_preserves_round_order() {
        let keys = RoundKeys(core::array::from_fn(|round| [round as u8; BLOCK_LEN]));
        let bytes = keys.to_bytes();
        assert_eq!(bytes.len(), 176);
        for (round, chunk) in bytes.chunks_exact(BLOCK_LEN).enumerate() {
            assert!(chunk.iter().all(|&b| b == round as u8));
        }
    }
}
