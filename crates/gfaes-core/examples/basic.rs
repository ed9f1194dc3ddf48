//! Encrypts the FIPS-197 example block and prints every round.

use gfaes_core::{decode_block, format_round, Aes128Key, Block, Cipher, RoundKind};

fn main() -> gfaes_core::Result<()> {
    let plaintext = decode_block("plaintext", "00112233445566778899aabbccddeeff")?;
    let key = Aes128Key::from_hex("000102030405060708090a0b0c0d0e0f")?;

    let cipher = Cipher::new();
    let round_keys = cipher.expand_key(&key);
    let mut print_round = |round: usize, _kind: RoundKind, state: &Block| {
        print!("{}", format_round(round, state));
    };
    let ciphertext = cipher.encrypt_block_observed(&plaintext, &round_keys, &mut print_round);

    let ciphertext_hex = hex::encode(ciphertext);
    println!("ciphertext: {ciphertext_hex}");
    assert_eq!(ciphertext_hex, "69c4e0d86a7b0430d8cdb78070b4c55a");
    Ok(())
}
