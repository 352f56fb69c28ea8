//! Offline client for ledger permits.
//!
//! Builds the EIP-712 digest of a permit exactly as the ledger does, signs it
//! with a secp256k1 key and recovers signers from `(v, r, s)` signatures. A
//! relayer submits the resulting signature through the ledger's `permit` call.
//!
//! ```ignore
//! let domain = Eip712Domain::new("Glo Dollar", "1", 1u64, ledger_address);
//! let signer = PermitSigner::from_hex(secret)?;
//! let permit = Permit { owner: signer.address(), spender, value, nonce, deadline };
//! let PermitSignature { v, r, s } = signer.sign_permit(&permit, &domain)?;
//! ```

pub mod domain;
pub mod error;
pub mod permit;
pub mod signer;

pub use domain::{keccak256, typed_data_digest, Eip712Domain, EIP712_DOMAIN_TYPEHASH};
pub use error::SignerError;
pub use permit::{Permit, PERMIT_TYPEHASH};
pub use primitive_types::{H160, H256, U256};
pub use signer::{address_of, recover_signer, PermitSignature, PermitSigner};
