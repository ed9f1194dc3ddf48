//! Rijndael substitution box derived from the field inverse.

use crate::inverse::InverseTable;

/// Constant term of the S-box affine transform.
const AFFINE_CONSTANT: u8 = 0x63;

/// Computes the S-box value for `a` directly from the inverse table.
#[inline]
pub fn sbox(inverse: &InverseTable, a: u8) -> u8 {
    let b = inverse.inverse(a);
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

/// All 256 S-box outputs, evaluated once.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SBox([u8; 256]);

impl SBox {
    /// Evaluates [`sbox`] for every byte.
    pub fn new(inverse: &InverseTable) -> Self {
        let mut table = [0u8; 256];
        for (a, out) in (0..=255u8).zip(table.iter_mut()) {
            *out = sbox(inverse, a);
        }
        Self(table)
    }

    /// Substitutes a single byte.
    #[inline]
    pub fn apply(&self, a: u8) -> u8 {
        self.0[usize::from(a)]
    }

    /// Substitutes each byte of a four-byte word.
    #[inline]
    pub fn apply_word(&self, word: [u8; 4]) -> [u8; 4] {
        word.map(|b| self.apply(b))
    }
}

impl core::fmt::Debug for SBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SBox").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIRST_ROW: [u8; 16] = [
        0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab,
        0x76,
    ];

    #[test]
    fn matches_published_table() {
        let table = SBox::new(&InverseTable::new());
        for (a, expected) in (0u8..16).zip(FIRST_ROW) {
            assert_eq!(table.apply(a), expected, "sbox({a:#04x})");
        }
        assert_eq!(table.apply(0x53), 0xed);
        assert_eq!(table.apply(0xff), 0x16);
        assert_eq!(table.apply(0xc9), 0xdd);
    }

    #[test]
    fn cached_table_agrees_with_direct_evaluation() {
        let inverse = InverseTable::new();
        let table = SBox::new(&inverse);
        for a in 0..=255u8 {
            assert_eq!(table.apply(a), sbox(&inverse, a));
        }
    }

    #[test]
    fn is_a_bijection() {
        let table = SBox::new(&InverseTable::new());
        let mut seen = [false; 256];
        for a in 0..=255u8 {
            let out = usize::from(table.apply(a));
            assert!(!seen[out]);
            seen[out] = true;
        }
    }

    #[test]
    fn has_no_fixed_points() {
        let table = SBox::new(&InverseTable::new());
        assert!((0..=255u8).all(|a| table.apply(a) != a));
    }

    proptest! {
        #[test]
        fn word_substitution_is_bytewise(word in any::<[u8; 4]>()) {
            let table = SBox::new(&InverseTable::new());
            let out = table.apply_word(word);
            for (o, w) in out.iter().zip(word) {
                prop_assert_eq!(*o, table.apply(w));
            }
        }
    }
}
