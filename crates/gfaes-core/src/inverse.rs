//! Multiplicative inverses of GF(2^8) built by walking a generator cycle.

use crate::error::{Error, Result};
use crate::gf;

/// Multiplicative generator of GF(2^8)* used by AES tooling.
pub const GENERATOR: u8 = 0x03;
/// Inverse of [`GENERATOR`].
pub const COGENERATOR: u8 = 0xf6;

/// Lookup table mapping every byte to its multiplicative inverse (`0 -> 0`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InverseTable([u8; 256]);

impl InverseTable {
    /// Builds the table from the AES generator pair `0x03`/`0xf6`.
    pub fn new() -> Self {
        match Self::with_generator(GENERATOR, COGENERATOR) {
            Ok(table) => table,
            Err(err) => panic!("built-in generator pair is broken: {err}"),
        }
    }

    /// Builds the table by walking powers of `generator` upwards and powers of
    /// `cogenerator` downwards at the same time.
    ///
    /// After `k` steps the walk holds `g^k` and `g^-k`, which are inverses of
    /// each other, and records the pair in both directions. The two walks meet
    /// halfway round the cycle, so a primitive pair fills every nonzero entry.
    /// Any other pair is rejected with [`Error::IncompleteInverseTable`].
    pub fn with_generator(generator: u8, cogenerator: u8) -> Result<Self> {
        let mut table = [0u8; 256];
        let mut up = 1u8;
        let mut down = 1u8;
        let mut closed = false;

        for _ in 0..256 {
            table[usize::from(up)] = down;
            up = gf::mult(up, generator);
            if up == down {
                closed = true;
                break;
            }
            down = gf::mult(down, cogenerator);
            table[usize::from(down)] = up;
        }
        table[0] = 0;

        let covered = (1..=255u8)
            .filter(|&a| gf::mult(a, table[usize::from(a)]) == 1)
            .count();
        if !closed || covered != 255 {
            return Err(Error::IncompleteInverseTable {
                generator,
                cogenerator,
                covered,
            });
        }

        tracing::debug!(generator, cogenerator, "built GF(2^8) inverse table");
        Ok(Self(table))
    }

    /// Returns the inverse of `a`, or `0` for `a == 0`.
    #[inline]
    pub fn inverse(&self, a: u8) -> u8 {
        self.0[usize::from(a)]
    }

    /// Exposes the raw table.
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for InverseTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InverseTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InverseTable").finish_non_exhaustive()
    }
}
