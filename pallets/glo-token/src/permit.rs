//! Signature-authorized approvals (EIP-2612 permits over an EIP-712 domain).
//!
//! The digest a holder signs is
//! `keccak256(0x19 0x01 ‖ domainSeparator ‖ keccak256(abi.encode(PERMIT_TYPEHASH,
//! owner, spender, value, nonce, deadline)))`. The domain separator binds the
//! token's hashed name and version, the chain id and the ledger address, so
//! the same payload can be rebuilt offline by any client.

use frame_support::{
    ensure,
    traits::{Get, UnixTime},
};
use sp_core::{H256, U256};
use sp_io::{crypto::secp256k1_ecdsa_recover, hashing::keccak_256};

use crate::{
    abi::{address_word, hash_words, u256_word},
    guard::Guards,
    types::{LedgerError, Principal},
    Config, HashedName, HashedVersion, Nonces, Pallet,
};

/// `keccak256("Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)")`
pub const PERMIT_TYPEHASH: [u8; 32] = [
    0x6e, 0x71, 0xed, 0xae, 0x12, 0xb1, 0xb9, 0x7f, 0x4d, 0x1f, 0x60, 0x37, 0x0f, 0xef, 0x10, 0x10,
    0x5f, 0xa2, 0xfa, 0xae, 0x01, 0x26, 0x11, 0x4a, 0x16, 0x9c, 0x64, 0x84, 0x5d, 0x61, 0x26, 0xc9,
];

/// `keccak256("EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")`
pub const EIP712_DOMAIN_TYPEHASH: [u8; 32] = [
    0x8b, 0x73, 0xc3, 0xc6, 0x9b, 0xb8, 0xfe, 0x3d, 0x51, 0x2e, 0xcc, 0x4c, 0xf7, 0x59, 0xcc, 0x79,
    0x23, 0x9f, 0x7b, 0x17, 0x9b, 0x0f, 0xfa, 0xca, 0xa9, 0xa7, 0x5d, 0x52, 0x2b, 0x39, 0x40, 0x0f,
];

/// Half of the secp256k1 group order. Signatures with a larger `s` are the
/// malleated twin of a low-`s` signature and are rejected.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Separator for an explicit domain. Used by [`Pallet::domain_separator`] with
/// the stored hashes and runtime constants.
pub fn domain_separator(
    hashed_name: H256,
    hashed_version: H256,
    chain_id: U256,
    verifying_contract: &Principal,
) -> H256 {
    hash_words(&[
        EIP712_DOMAIN_TYPEHASH,
        hashed_name.0,
        hashed_version.0,
        u256_word(chain_id),
        address_word(verifying_contract),
    ])
}

pub fn permit_struct_hash(
    owner: &Principal,
    spender: &Principal,
    value: U256,
    nonce: U256,
    deadline: U256,
) -> H256 {
    hash_words(&[
        PERMIT_TYPEHASH,
        address_word(owner),
        address_word(spender),
        u256_word(value),
        u256_word(nonce),
        u256_word(deadline),
    ])
}

/// EIP-712 typed-data digest: `keccak256(0x19 0x01 ‖ domain ‖ struct_hash)`.
pub fn typed_data_digest(domain: H256, struct_hash: H256) -> H256 {
    let mut buf = [0u8; 66];
    buf[0] = 0x19;
    buf[1] = 0x01;
    buf[2..34].copy_from_slice(domain.as_bytes());
    buf[34..].copy_from_slice(struct_hash.as_bytes());
    H256(keccak_256(&buf))
}

/// Recovers the signing principal of `digest`.
///
/// Returns `None` for a recovery byte other than 27/28, an `s` above half the
/// curve order, or a signature no public key verifies.
pub fn recover_signer(digest: &H256, v: u8, r: &H256, s: &H256) -> Option<Principal> {
    if v != 27 && v != 28 {
        return None;
    }
    if s.0 > SECP256K1_HALF_ORDER {
        return None;
    }
    let mut sig = [0u8; 65];
    sig[..32].copy_from_slice(r.as_bytes());
    sig[32..64].copy_from_slice(s.as_bytes());
    sig[64] = v - 27;
    let public = secp256k1_ecdsa_recover(&sig, &digest.0).ok()?;
    Some(Principal::from_slice(&keccak_256(&public)[12..]))
}

impl<T: Config> Pallet<T> {
    pub fn domain_separator() -> H256 {
        domain_separator(
            HashedName::<T>::get(),
            HashedVersion::<T>::get(),
            U256::from(T::ChainId::get()),
            &T::LedgerAddress::get(),
        )
    }

    /// Digest `owner` must sign to approve `value` to `spender`, bound to the
    /// owner's current nonce.
    pub fn permit_digest(
        owner: &Principal,
        spender: &Principal,
        value: U256,
        deadline: U256,
    ) -> H256 {
        let nonce = Nonces::<T>::get(owner);
        typed_data_digest(
            Self::domain_separator(),
            permit_struct_hash(owner, spender, value, nonce, deadline),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn do_permit(
        owner: Principal,
        spender: Principal,
        value: U256,
        deadline: U256,
        v: u8,
        r: H256,
        s: H256,
    ) -> Result<(), LedgerError> {
        Guards::new().when_not_paused().not_denylisted(owner).not_denylisted(spender).check::<T>()?;

        let now = U256::from(T::UnixTime::now().as_secs());
        ensure!(now <= deadline, LedgerError::ExpiredDeadline { deadline, now });

        let digest = Self::permit_digest(&owner, &spender, value, deadline);
        let signer = recover_signer(&digest, v, &r, &s);
        ensure!(signer == Some(owner), LedgerError::InvalidSignature);

        Self::ensure_approve_parties(&owner, &spender)?;
        let nonce = Nonces::<T>::get(owner).checked_add(U256::one()).ok_or(LedgerError::Overflow)?;

        Nonces::<T>::insert(owner, nonce);
        Self::write_allowance(owner, spender, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::H160;

    fn hex32(s: &str) -> H256 {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        H256(out)
    }

    #[test]
    fn typehashes_match_their_type_strings() {
        assert_eq!(
            keccak_256(
                b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)"
            ),
            PERMIT_TYPEHASH
        );
        assert_eq!(
            keccak_256(
                b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)"
            ),
            EIP712_DOMAIN_TYPEHASH
        );
    }

    #[test]
    fn domain_separator_matches_known_value() {
        let separator = domain_separator(
            H256(keccak_256(b"Glo Dollar")),
            H256(keccak_256(b"1")),
            U256::one(),
            &H160::repeat_byte(0x42),
        );
        assert_eq!(
            separator,
            hex32("f299353460dd8fc263b98c042ce6cc795f79c6af2e958140dbfcab8d8e8a7e42")
        );
    }

    #[test]
    fn recover_rejects_bad_recovery_byte_and_high_s() {
        let digest = H256::repeat_byte(1);
        let r = H256::repeat_byte(2);
        assert_eq!(recover_signer(&digest, 0, &r, &H256::repeat_byte(3)), None);
        assert_eq!(recover_signer(&digest, 29, &r, &H256::repeat_byte(3)), None);

        let mut high = SECP256K1_HALF_ORDER;
        high[31] += 1;
        assert_eq!(recover_signer(&digest, 27, &r, &H256(high)), None);
    }

    #[test]
    fn recover_rejects_zero_signature() {
        let digest = H256::repeat_byte(9);
        assert_eq!(recover_signer(&digest, 27, &H256::zero(), &H256::zero()), None);
    }
}
