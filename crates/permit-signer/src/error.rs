use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("secret key is not a valid secp256k1 scalar")]
    InvalidSecretKey,
    #[error("secret key is not valid hex")]
    InvalidHex,
    #[error("recovery byte {0} is not 27 or 28")]
    InvalidRecoveryId(u8),
    #[error("signature s value is in the upper half of the curve order")]
    MalleableSignature,
    #[error("signature must be 65 bytes, got {0}")]
    InvalidLength(usize),
    #[error("signing failed")]
    Signing,
    #[error("public key recovery failed")]
    Recovery,
}
