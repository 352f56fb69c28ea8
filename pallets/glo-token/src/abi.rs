//! 32-byte ABI words, as used by EIP-712 hashing and the slot view.

use sp_core::{H256, U256};
use sp_io::hashing::keccak_256;
use sp_std::vec::Vec;

use crate::types::Principal;

/// Big-endian 32-byte word of `value`.
pub fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    for (i, limb) in value.0.iter().enumerate() {
        let end = 32 - i * 8;
        word[end - 8..end].copy_from_slice(&limb.to_be_bytes());
    }
    word
}

/// `who`, left-padded with zeros to a full word.
pub fn address_word(who: &Principal) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(who.as_bytes());
    word
}

/// `keccak256` over the concatenation of `words`.
pub fn hash_words(words: &[[u8; 32]]) -> H256 {
    let mut buf = Vec::with_capacity(words.len() * 32);
    for word in words {
        buf.extend_from_slice(word);
    }
    H256(keccak_256(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::H160;

    #[test]
    fn u256_word_is_big_endian() {
        let word = u256_word(U256::from(0x0102u64));
        assert_eq!(word[30], 0x01);
        assert_eq!(word[31], 0x02);
        assert!(word[..30].iter().all(|b| *b == 0));

        let top = u256_word(U256::one() << 255);
        assert_eq!(top[0], 0x80);
        assert_eq!(U256::from_big_endian(&u256_word(U256::MAX - 7)), U256::MAX - 7);
    }

    #[test]
    fn address_word_left_pads() {
        let word = address_word(&H160::repeat_byte(0xab));
        assert!(word[..12].iter().all(|b| *b == 0));
        assert!(word[12..].iter().all(|b| *b == 0xab));
    }
}
