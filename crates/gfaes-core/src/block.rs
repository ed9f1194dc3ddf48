//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block (and of an AES-128 key) in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes, laid out column by column.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a 16-byte slice into a [`Block`].
///
/// `field` names the input in the returned [`Error::InvalidLength`].
pub fn block_from_slice(field: &'static str, bytes: &[u8]) -> Result<Block> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        field,
        expected: BLOCK_LEN,
        actual: bytes.len(),
    })
}
