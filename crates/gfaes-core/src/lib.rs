//! AES-128 encryption built from the ground up.
//!
//! Nothing here leans on an existing cipher implementation:
//! - GF(2^8) arithmetic under the AES reduction polynomial ([`gf`]).
//! - Multiplicative inverses from a generator cycle walk ([`InverseTable`]).
//! - The S-box as an affine map over those inverses ([`SBox`]).
//! - The AES-128 key schedule and the ten-round encryption pipeline, with an
//!   optional [`RoundObserver`] for intermediate states.
//!
//! Only forward encryption of single blocks is provided. The implementation
//! favours clarity over constant-time guarantees; it is not side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod encoding;
mod error;
pub mod gf;
mod inverse;
mod key;
mod observer;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt, encrypt_block, expand_key, Cipher};
pub use crate::encoding::{decode_block, format_block, format_round};
pub use crate::error::{Error, Result};
pub use crate::inverse::{InverseTable, COGENERATOR, GENERATOR};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT, SCHEDULE_LEN};
pub use crate::observer::{
    NoopObserver, RoundKind, RoundObserver, RoundRecord, RoundTrace, ROUNDS,
};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::{sbox, SBox};
pub use crate::schedule::round_constants;
