//! Value types shared by every component of the ledger.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_core::{H160, H256, U256};

/// 20-byte ledger identity. The all-zero value is never a valid counterparty.
pub type Principal = H160;

/// Token name bytes (e.g., "Glo Dollar").
pub type NameBytes = BoundedVec<u8, ConstU32<64>>;

/// Token symbol bytes (e.g., "USDGLO").
pub type SymbolBytes = BoundedVec<u8, ConstU32<16>>;

/// The null principal.
pub const NULL_PRINCIPAL: Principal = H160([0u8; 20]);

/// Fixed token decimals.
pub const DECIMALS: u8 = 18;

/// Version string bound into the EIP-712 domain.
pub const DOMAIN_VERSION: &[u8] = b"1";

/// Largest total supply the ledger accepts: 2^255 - 1.
///
/// Keeping bit 255 free is what lets [`AccountSlot`] carry the denylist flag.
pub const SUPPLY_CAP: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);

/// Allowance value that is never decremented by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: U256 = U256::MAX;

/// Permissions known to the role registry.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    Debug,
)]
pub enum Role {
    DefaultAdmin,
    Minter,
    Pauser,
    Denylister,
    Upgrader,
}

impl Role {
    pub const ALL: [Role; 5] =
        [Role::DefaultAdmin, Role::Minter, Role::Pauser, Role::Denylister, Role::Upgrader];

    /// Canonical role name, hashed into [`Role::id`].
    pub fn name(&self) -> &'static [u8] {
        match self {
            Role::DefaultAdmin => b"DEFAULT_ADMIN_ROLE",
            Role::Minter => b"MINTER_ROLE",
            Role::Pauser => b"PAUSER_ROLE",
            Role::Denylister => b"DENYLISTER_ROLE",
            Role::Upgrader => b"UPGRADER_ROLE",
        }
    }

    /// 32-byte role identifier: zero for the default admin, `keccak256(name)`
    /// otherwise.
    pub fn id(&self) -> H256 {
        match self {
            Role::DefaultAdmin => H256::zero(),
            other => H256(sp_io::hashing::keccak_256(other.name())),
        }
    }

    /// Role whose members may grant and revoke `self`.
    pub fn admin(&self) -> Role {
        Role::DefaultAdmin
    }
}

/// A principal's balance slot: bits 0..=254 hold the balance, bit 255 is the
/// denylist flag.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Debug,
)]
pub struct AccountSlot(U256);

impl AccountSlot {
    pub fn from_raw(raw: U256) -> Self {
        AccountSlot(raw)
    }

    /// The packed 256-bit word as stored.
    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn balance(&self) -> U256 {
        self.0 & SUPPLY_CAP
    }

    pub fn is_denylisted(&self) -> bool {
        self.0.bit(255)
    }

    /// Replaces the balance bits, leaving the flag untouched.
    ///
    /// `balance` must not exceed [`SUPPLY_CAP`].
    pub fn with_balance(self, balance: U256) -> Self {
        debug_assert!(balance <= SUPPLY_CAP);
        AccountSlot((self.0 & !SUPPLY_CAP) | (balance & SUPPLY_CAP))
    }

    pub fn with_denylisted(self, denylisted: bool) -> Self {
        if denylisted {
            AccountSlot(self.0 | !SUPPLY_CAP)
        } else {
            AccountSlot(self.0 & SUPPLY_CAP)
        }
    }
}

/// One-time migration executed together with a code swap.
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, Debug)]
pub enum UpgradeCall {
    /// Runs the initializer step `version`, rebranding the token and
    /// re-deriving the EIP-712 domain name hash.
    Reinitialize { version: u8, name: NameBytes, symbol: SymbolBytes },
}

/// Coarse classification of [`LedgerError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorCategory {
    Authorization,
    StateGuard,
    Precondition,
    Numeric,
    SignatureProtocol,
}

/// Reason a ledger operation was rejected, with the principal or amount at
/// fault wherever the rule is principal- or amount-specific.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Debug)]
pub enum LedgerError {
    Unauthorized { role: Role, account: Principal },
    CanOnlyRenounceForSelf { account: Principal, caller: Principal },
    SystemPaused,
    AlreadyPaused,
    NotPaused,
    IsDenylisted(Principal),
    AlreadyDenylisted(Principal),
    NotDenylisted(Principal),
    MintToNull,
    BurnFromNull,
    TransferFromNull,
    TransferToNull,
    ApproveFromNull,
    ApproveToNull,
    InsufficientBalance { account: Principal, balance: U256, needed: U256 },
    InsufficientAllowance { owner: Principal, spender: Principal, allowance: U256, needed: U256 },
    AllowanceUnderflow { owner: Principal, spender: Principal, allowance: U256, subtracted: U256 },
    AllowanceOverflow { owner: Principal, spender: Principal },
    SupplyCapExceeded(U256),
    Overflow,
    Underflow,
    ExpiredDeadline { deadline: U256, now: U256 },
    InvalidSignature,
    AlreadyInitialized { version: u8 },
}

impl LedgerError {
    pub fn category(&self) -> ErrorCategory {
        use LedgerError::*;
        match self {
            Unauthorized { .. } | CanOnlyRenounceForSelf { .. } => ErrorCategory::Authorization,
            SystemPaused | IsDenylisted(_) => ErrorCategory::StateGuard,
            AlreadyPaused
            | NotPaused
            | AlreadyDenylisted(_)
            | NotDenylisted(_)
            | MintToNull
            | BurnFromNull
            | TransferFromNull
            | TransferToNull
            | ApproveFromNull
            | ApproveToNull
            | AlreadyInitialized { .. } => ErrorCategory::Precondition,
            InsufficientBalance { .. }
            | InsufficientAllowance { .. }
            | AllowanceUnderflow { .. }
            | AllowanceOverflow { .. }
            | SupplyCapExceeded(_)
            | Overflow
            | Underflow => ErrorCategory::Numeric,
            ExpiredDeadline { .. } | InvalidSignature => ErrorCategory::SignatureProtocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(s: &str) -> H256 {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        H256(out)
    }

    #[test]
    fn role_ids_match_keccak_of_names() {
        assert_eq!(Role::DefaultAdmin.id(), H256::zero());
        assert_eq!(
            Role::Minter.id(),
            hex32("9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6")
        );
        assert_eq!(
            Role::Pauser.id(),
            hex32("65d7a28e3265b37a6474929f336521b332c1681b933f6cb9f3376673440d862a")
        );
        assert_eq!(
            Role::Denylister.id(),
            hex32("322768a59ff125c97b97e61032dad139a6ca630f408625c2c32dc2f262dc7790")
        );
        assert_eq!(
            Role::Upgrader.id(),
            hex32("189ab7a9244df0848122154315af71fe140f3db0fe014031783b0946b8c9d2e3")
        );
    }

    #[test]
    fn every_role_is_administered_by_default_admin() {
        for role in Role::ALL {
            assert_eq!(role.admin(), Role::DefaultAdmin);
        }
    }

    #[test]
    fn supply_cap_is_two_pow_255_minus_one() {
        assert_eq!(SUPPLY_CAP, (U256::one() << 255) - 1);
        assert!(!SUPPLY_CAP.bit(255));
    }

    #[test]
    fn account_slot_packs_flag_into_high_bit() {
        let slot = AccountSlot::default().with_balance(U256::from(50_000u64));
        assert_eq!(slot.raw(), U256::from(50_000u64));
        assert!(!slot.is_denylisted());

        let flagged = slot.with_denylisted(true);
        assert_eq!(flagged.raw(), (U256::one() << 255) | U256::from(50_000u64));
        assert_eq!(flagged.balance(), U256::from(50_000u64));
        assert!(flagged.is_denylisted());

        let emptied = flagged.with_balance(U256::zero());
        assert!(emptied.is_denylisted());
        assert_eq!(emptied.balance(), U256::zero());

        assert_eq!(flagged.with_denylisted(false), slot);
    }

    #[test]
    fn account_slot_holds_a_balance_at_the_cap() {
        let slot = AccountSlot::default().with_balance(SUPPLY_CAP).with_denylisted(true);
        assert_eq!(slot.balance(), SUPPLY_CAP);
        assert_eq!(slot.raw(), U256::MAX);
    }

    #[test]
    fn errors_are_categorised() {
        let who = H160::repeat_byte(7);
        assert_eq!(
            LedgerError::Unauthorized { role: Role::Minter, account: who }.category(),
            ErrorCategory::Authorization
        );
        assert_eq!(LedgerError::IsDenylisted(who).category(), ErrorCategory::StateGuard);
        assert_eq!(LedgerError::SystemPaused.category(), ErrorCategory::StateGuard);
        assert_eq!(LedgerError::AlreadyDenylisted(who).category(), ErrorCategory::Precondition);
        assert_eq!(LedgerError::MintToNull.category(), ErrorCategory::Precondition);
        assert_eq!(
            LedgerError::SupplyCapExceeded(U256::one()).category(),
            ErrorCategory::Numeric
        );
        assert_eq!(LedgerError::InvalidSignature.category(), ErrorCategory::SignatureProtocol);
    }
}
