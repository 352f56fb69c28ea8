use primitive_types::{H160, H256, U256};

use crate::domain::{address_word, hash_words, typed_data_digest, u256_word, Eip712Domain};

/// `keccak256("Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)")`
pub const PERMIT_TYPEHASH: [u8; 32] = [
    0x6e, 0x71, 0xed, 0xae, 0x12, 0xb1, 0xb9, 0x7f, 0x4d, 0x1f, 0x60, 0x37, 0x0f, 0xef, 0x10, 0x10,
    0x5f, 0xa2, 0xfa, 0xae, 0x01, 0x26, 0x11, 0x4a, 0x16, 0x9c, 0x64, 0x84, 0x5d, 0x61, 0x26, 0xc9,
];

/// An approval the owner authorizes off-chain. `nonce` must equal the owner's
/// current on-ledger nonce for the signature to be accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permit {
    pub owner: H160,
    pub spender: H160,
    pub value: U256,
    pub nonce: U256,
    /// Unix seconds after which the ledger rejects the permit.
    pub deadline: U256,
}

impl Permit {
    pub fn struct_hash(&self) -> H256 {
        hash_words(&[
            PERMIT_TYPEHASH,
            address_word(&self.owner),
            address_word(&self.spender),
            u256_word(self.value),
            u256_word(self.nonce),
            u256_word(self.deadline),
        ])
    }

    pub fn digest(&self, domain: &Eip712Domain) -> H256 {
        typed_data_digest(&domain.separator(), &self.struct_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keccak256;

    #[test]
    fn typehash_matches_type_string() {
        assert_eq!(
            keccak256(
                b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)"
            ),
            PERMIT_TYPEHASH
        );
    }

    #[test]
    fn digest_binds_nonce() {
        let domain = Eip712Domain::new("Glo Dollar", "1", 1u64, H160::repeat_byte(0x42));
        let permit = Permit {
            owner: H160::from_low_u64_be(2),
            spender: H160::from_low_u64_be(3),
            value: U256::from(1_000u64),
            nonce: U256::zero(),
            deadline: U256::from(1_700_000_100u64),
        };
        let next = Permit { nonce: U256::one(), ..permit.clone() };
        assert_ne!(permit.digest(&domain), next.digest(&domain));
        assert_eq!(permit.digest(&domain), permit.clone().digest(&domain));
    }
}
