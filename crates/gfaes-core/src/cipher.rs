//! AES-128 block encryption.

use std::sync::OnceLock;

use crate::block::Block;
use crate::inverse::InverseTable;
use crate::key::{Aes128Key, RoundKeys};
use crate::observer::{NoopObserver, RoundKind, RoundObserver, ROUNDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::SBox;
use crate::schedule;

/// Cipher context owning the substitution tables.
///
/// Building one walks the field once; afterwards it is immutable and can be
/// shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cipher {
    inverse: InverseTable,
    sbox: SBox,
}

impl Cipher {
    /// Builds the inverse table and S-box from the AES generator pair.
    pub fn new() -> Self {
        Self::from_inverse_table(InverseTable::new())
    }

    /// Builds a cipher around an existing inverse table.
    pub fn from_inverse_table(inverse: InverseTable) -> Self {
        let sbox = SBox::new(&inverse);
        Self { inverse, sbox }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static Cipher {
        static SHARED: OnceLock<Cipher> = OnceLock::new();
        SHARED.get_or_init(Cipher::new)
    }

    /// Inverse table backing the S-box.
    pub fn inverse_table(&self) -> &InverseTable {
        &self.inverse
    }

    /// Substitution table.
    pub fn sbox(&self) -> &SBox {
        &self.sbox
    }

    /// Expands a 128-bit key into 11 round keys.
    pub fn expand_key(&self, key: &Aes128Key) -> RoundKeys {
        schedule::expand_key(&self.sbox, key)
    }

    /// Encrypts a single 16-byte block with pre-expanded round keys.
    pub fn encrypt_block(&self, block: &Block, round_keys: &RoundKeys) -> Block {
        self.encrypt_block_observed(block, round_keys, &mut NoopObserver)
    }

    /// Encrypts a single block, reporting the state after each of the ten
    /// rounds to `observer`.
    pub fn encrypt_block_observed<O>(
        &self,
        block: &Block,
        round_keys: &RoundKeys,
        observer: &mut O,
    ) -> Block
    where
        O: RoundObserver + ?Sized,
    {
        let _span = tracing::trace_span!("encrypt_block").entered();
        let mut state = *block;

        add_round_key(&mut state, round_keys.get(0));

        for round in 1..=ROUNDS {
            let kind = RoundKind::of(round);
            sub_bytes(&self.sbox, &mut state);
            shift_rows(&mut state);
            if kind.mixes_columns() {
                mix_columns(&mut state);
            }
            add_round_key(&mut state, round_keys.get(round));

            tracing::trace!(round, state = %hex::encode(state), "round complete");
            observer.on_round(round, kind, &state);
        }

        state
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a key with the shared cipher.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    Cipher::shared().expand_key(key)
}

/// Encrypts a block with the shared cipher and pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    Cipher::shared().encrypt_block(block, round_keys)
}

/// Expands `key` and encrypts one block with the shared cipher.
pub fn encrypt(plaintext: &Block, key: &Aes128Key) -> Block {
    let cipher = Cipher::shared();
    cipher.encrypt_block(plaintext, &cipher.expand_key(key))
}
