//! secp256k1 signing and recovery with Ethereum-style `(v, r, s)` signatures.

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use primitive_types::{H160, H256};
use zeroize::Zeroizing;

use crate::{
    domain::{keccak256, Eip712Domain},
    error::SignerError,
    permit::Permit,
};

/// Half of the secp256k1 group order; the ledger rejects any larger `s`.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermitSignature {
    /// 27 or 28.
    pub v: u8,
    pub r: H256,
    pub s: H256,
}

impl PermitSignature {
    /// `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(self.r.as_bytes());
        out[32..64].copy_from_slice(self.s.as_bytes());
        out[64] = self.v;
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignerError> {
        if bytes.len() != 65 {
            return Err(SignerError::InvalidLength(bytes.len()));
        }
        Ok(Self {
            r: H256::from_slice(&bytes[..32]),
            s: H256::from_slice(&bytes[32..64]),
            v: bytes[64],
        })
    }

    pub fn is_low_s(&self) -> bool {
        self.s.0 <= SECP256K1_HALF_ORDER
    }
}

/// Holds a permit owner's secret key. The key material is wiped on drop.
pub struct PermitSigner {
    key: SigningKey,
}

impl PermitSigner {
    pub fn from_bytes(secret: &[u8]) -> Result<Self, SignerError> {
        let key = SigningKey::from_slice(secret).map_err(|_| SignerError::InvalidSecretKey)?;
        Ok(Self { key })
    }

    /// Accepts the key with or without a `0x` prefix.
    pub fn from_hex(secret: &str) -> Result<Self, SignerError> {
        let trimmed = secret.strip_prefix("0x").unwrap_or(secret);
        let bytes = Zeroizing::new(hex::decode(trimmed).map_err(|_| SignerError::InvalidHex)?);
        Self::from_bytes(&bytes)
    }

    pub fn address(&self) -> H160 {
        address_of(self.key.verifying_key())
    }

    /// Signs a 32-byte digest, always producing a low-`s` signature.
    pub fn sign_digest(&self, digest: &H256) -> Result<PermitSignature, SignerError> {
        let (signature, recovery_id) =
            self.key.sign_prehash_recoverable(digest.as_bytes()).map_err(|_| SignerError::Signing)?;

        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let bytes = signature.to_bytes();
        Ok(PermitSignature {
            v: 27 + recovery_id.to_byte(),
            r: H256::from_slice(&bytes[..32]),
            s: H256::from_slice(&bytes[32..]),
        })
    }

    pub fn sign_permit(
        &self,
        permit: &Permit,
        domain: &Eip712Domain,
    ) -> Result<PermitSignature, SignerError> {
        self.sign_digest(&permit.digest(domain))
    }
}

/// Ethereum address of a public key: the last 20 bytes of the keccak hash of
/// its uncompressed encoding without the `0x04` tag.
pub fn address_of(key: &VerifyingKey) -> H160 {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    H160::from_slice(&hash[12..])
}

/// Recovers the address that signed `digest`, applying the ledger's rules:
/// `v` must be 27 or 28 and `s` must be in the lower half of the curve order.
pub fn recover_signer(digest: &H256, signature: &PermitSignature) -> Result<H160, SignerError> {
    let recovery_id = match signature.v {
        27 => RecoveryId::new(false, false),
        28 => RecoveryId::new(true, false),
        other => return Err(SignerError::InvalidRecoveryId(other)),
    };
    if !signature.is_low_s() {
        return Err(SignerError::MalleableSignature);
    }
    let sig = Signature::from_scalars(signature.r.0, signature.s.0)
        .map_err(|_| SignerError::Recovery)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, recovery_id)
        .map_err(|_| SignerError::Recovery)?;
    Ok(address_of(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use proptest::prelude::*;

    // Well-known development key (Hardhat account #0).
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "f39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn domain() -> Eip712Domain {
        Eip712Domain::new("Glo Dollar", "1", 1u64, H160::repeat_byte(0x42))
    }

    #[test]
    fn derives_known_address() {
        let signer = PermitSigner::from_hex(DEV_KEY).unwrap();
        assert_eq!(hex::encode(signer.address()), DEV_ADDRESS);
    }

    #[test]
    fn rejects_bad_secret_keys() {
        assert_eq!(PermitSigner::from_bytes(&[0u8; 32]).err(), Some(SignerError::InvalidSecretKey));
        assert_eq!(PermitSigner::from_bytes(&[0xffu8; 32]).err(), Some(SignerError::InvalidSecretKey));
        assert_eq!(PermitSigner::from_hex("zz").err(), Some(SignerError::InvalidHex));
    }

    #[test]
    fn signed_permit_recovers_to_owner() {
        let signer = PermitSigner::from_hex(DEV_KEY).unwrap();
        let permit = Permit {
            owner: signer.address(),
            spender: H160::from_low_u64_be(3),
            value: U256::from(1_000u64),
            nonce: U256::zero(),
            deadline: U256::from(1_700_000_100u64),
        };
        let signature = signer.sign_permit(&permit, &domain()).unwrap();
        assert!(signature.v == 27 || signature.v == 28);
        assert!(signature.is_low_s());
        assert_eq!(recover_signer(&permit.digest(&domain()), &signature), Ok(signer.address()));

        let other = Permit { value: U256::from(1_001u64), ..permit };
        assert_ne!(recover_signer(&other.digest(&domain()), &signature), Ok(signer.address()));
    }

    #[test]
    fn rejects_malleated_and_mislabelled_signatures() {
        let signer = PermitSigner::from_hex(DEV_KEY).unwrap();
        let digest = H256::repeat_byte(0x11);
        let signature = signer.sign_digest(&digest).unwrap();

        let bad_v = PermitSignature { v: 1, ..signature };
        assert_eq!(recover_signer(&digest, &bad_v), Err(SignerError::InvalidRecoveryId(1)));

        let mut high = SECP256K1_HALF_ORDER;
        high[31] += 1;
        let high_s = PermitSignature { s: H256(high), ..signature };
        assert_eq!(recover_signer(&digest, &high_s), Err(SignerError::MalleableSignature));
    }

    #[test]
    fn signature_bytes_are_r_s_v() {
        let signature =
            PermitSignature { v: 28, r: H256::repeat_byte(0xaa), s: H256::repeat_byte(0x0b) };
        let bytes = signature.to_bytes();
        assert_eq!(bytes[0], 0xaa);
        assert_eq!(bytes[32], 0x0b);
        assert_eq!(bytes[64], 28);
        assert_eq!(PermitSignature::from_bytes(&bytes), Ok(signature));
        assert_eq!(
            PermitSignature::from_bytes(&bytes[..64]),
            Err(SignerError::InvalidLength(64))
        );
    }

    proptest! {
        #[test]
        fn any_digest_round_trips(seed in any::<[u8; 32]>(), digest in any::<[u8; 32]>()) {
            prop_assume!(seed != [0u8; 32]);
            if let Ok(signer) = PermitSigner::from_bytes(&seed) {
                let signature = signer.sign_digest(&H256(digest)).unwrap();
                prop_assert!(signature.is_low_s());
                prop_assert_eq!(recover_signer(&H256(digest), &signature), Ok(signer.address()));
            }
        }
    }
}
