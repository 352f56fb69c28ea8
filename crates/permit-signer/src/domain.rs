//! EIP-712 domain and ABI word helpers.

use primitive_types::{H160, H256, U256};
use sha3::{Digest, Keccak256};

/// `keccak256("EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")`
pub const EIP712_DOMAIN_TYPEHASH: [u8; 32] = [
    0x8b, 0x73, 0xc3, 0xc6, 0x9b, 0xb8, 0xfe, 0x3d, 0x51, 0x2e, 0xcc, 0x4c, 0xf7, 0x59, 0xcc, 0x79,
    0x23, 0x9f, 0x7b, 0x17, 0x9b, 0x0f, 0xfa, 0xca, 0xa9, 0xa7, 0x5d, 0x52, 0x2b, 0x39, 0x40, 0x0f,
];

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Big-endian 32-byte word of `value`.
pub fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    for (i, limb) in value.0.iter().enumerate() {
        let end = 32 - i * 8;
        word[end - 8..end].copy_from_slice(&limb.to_be_bytes());
    }
    word
}

pub fn address_word(address: &H160) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

pub(crate) fn hash_words(words: &[[u8; 32]]) -> H256 {
    let mut hasher = Keccak256::new();
    for word in words {
        hasher.update(word);
    }
    H256(hasher.finalize().into())
}

/// Signing domain of one deployed ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    pub verifying_contract: H160,
}

impl Eip712Domain {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: impl Into<U256>,
        verifying_contract: H160,
    ) -> Self {
        Self { name: name.into(), version: version.into(), chain_id: chain_id.into(), verifying_contract }
    }

    pub fn separator(&self) -> H256 {
        hash_words(&[
            EIP712_DOMAIN_TYPEHASH,
            keccak256(self.name.as_bytes()),
            keccak256(self.version.as_bytes()),
            u256_word(self.chain_id),
            address_word(&self.verifying_contract),
        ])
    }
}

/// `keccak256(0x19 0x01 ‖ domain_separator ‖ struct_hash)`.
pub fn typed_data_digest(domain_separator: &H256, struct_hash: &H256) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update([0x19, 0x01]);
    hasher.update(domain_separator.as_bytes());
    hasher.update(struct_hash.as_bytes());
    H256(hasher.finalize().into())
}
