//! AES round transformations.

use crate::block::{xor_in_place, Block};
use crate::gf::{add, mult};
use crate::sbox::SBox;

/// Circulant MDS matrix used by MixColumns, row by row.
const MDS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(sbox: &SBox, state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox.apply(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let old = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[4 * col + row] = old[4 * ((col + row) % 4) + row];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let input = *col;
    for (out, coefficients) in col.iter_mut().zip(MDS.iter()) {
        *out = coefficients
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&c, &b)| add(acc, mult(c, b)));
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
