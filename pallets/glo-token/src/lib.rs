#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but still the simplest read API for runtime callers.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Permissioned, upgradeable fungible-token ledger.
//!
//! Principals are 20-byte addresses mapped from signed origins through
//! [`Config::AddressMapping`]. Every mutating call runs a guard chain (pause,
//! denylist, role) before its business rules; the internal `do_*` API returns
//! a [`LedgerError`] that names the principal or amount at fault, while the
//! dispatchables map it to a unit [`Error`] and log the full value.

use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_core::{H160, H256, U256};
use sp_runtime::traits::Convert;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::{
    AccountSlot, ErrorCategory, LedgerError, NameBytes, Principal, Role, SymbolBytes, UpgradeCall,
    DECIMALS, NULL_PRINCIPAL, SUPPLY_CAP, UNLIMITED_ALLOWANCE,
};
pub use weights::WeightInfo;

pub mod abi;
pub mod layout;
pub mod migrations;
pub mod permit;
pub mod types;
pub mod weights;

mod access;
mod denylist;
mod guard;
mod ledger;
mod pausable;
mod upgrade;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "pallet-glo-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to run the first initializer step.
        type DeployOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Maps a signed account to the principal it acts as.
        type AddressMapping: Convert<Self::AccountId, Principal>;

        /// Clock that permit deadlines are compared against.
        type UnixTime: UnixTime;

        /// Chain id bound into the permit domain.
        #[pallet::constant]
        type ChainId: Get<u64>;

        /// Address bound into the permit domain as the verifying contract.
        #[pallet::constant]
        type LedgerAddress: Get<H160>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Number of initializer steps that have run.
    #[pallet::storage]
    pub type Initialized<T> = StorageValue<_, u8, ValueQuery>;

    /// Packed balance and denylist flag per principal.
    #[pallet::storage]
    pub type Balances<T> = StorageMap<_, Blake2_128Concat, Principal, AccountSlot, ValueQuery>;

    /// Remaining spend budget, keyed by (owner, spender).
    #[pallet::storage]
    pub type Allowances<T> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Principal,
        Blake2_128Concat,
        Principal,
        U256,
        ValueQuery,
    >;

    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, U256, ValueQuery>;

    /// Token name (e.g., "Glo Dollar")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, NameBytes, ValueQuery>;

    /// Token symbol (e.g., "USDGLO")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, SymbolBytes, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    pub type Roles<T> =
        StorageDoubleMap<_, Twox64Concat, Role, Blake2_128Concat, Principal, bool, ValueQuery>;

    /// `keccak256(name)` as bound into the permit domain.
    #[pallet::storage]
    pub type HashedName<T> = StorageValue<_, H256, ValueQuery>;

    /// `keccak256(version)` as bound into the permit domain.
    #[pallet::storage]
    pub type HashedVersion<T> = StorageValue<_, H256, ValueQuery>;

    /// Permit nonce per owner.
    #[pallet::storage]
    #[pallet::getter(fn nonces)]
    pub type Nonces<T> = StorageMap<_, Blake2_128Concat, Principal, U256, ValueQuery>;

    /// Reference to the active implementation, set by `upgrade_to`.
    #[pallet::storage]
    #[pallet::getter(fn implementation)]
    pub type Implementation<T> = StorageValue<_, H256, ValueQuery>;

    /// Words of the reserved gaps in the slot view. Nothing writes here until a
    /// later version appends a field.
    #[pallet::storage]
    pub type ReservedSlots<T> = StorageMap<_, Twox64Concat, u16, H256, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved. Mints come from, and burns go to, the null principal.
        Transferred { from: Principal, to: Principal, amount: U256 },
        Minted { minter: Principal, to: Principal, amount: U256 },
        Burned { burner: Principal, amount: U256 },
        /// Allowance set to `amount`.
        Approved { owner: Principal, spender: Principal, amount: U256 },
        Denylisted { actor: Principal, target: Principal },
        Undenylisted { actor: Principal, target: Principal },
        DenylistedFundsDestroyed { actor: Principal, target: Principal, amount: U256 },
        Paused { actor: Principal },
        Unpaused { actor: Principal },
        RoleGranted { role: Role, account: Principal, sender: Principal },
        RoleRevoked { role: Role, account: Principal, sender: Principal },
        /// Initializer step `version` completed.
        Initialized { version: u8 },
        Upgraded { implementation: H256 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the role the operation requires.
        Unauthorized,
        CanOnlyRenounceForSelf,
        SystemPaused,
        AlreadyPaused,
        NotPaused,
        /// A participant of the operation is denylisted.
        IsDenylisted,
        AlreadyDenylisted,
        NotDenylisted,
        MintToNull,
        BurnFromNull,
        TransferFromNull,
        TransferToNull,
        ApproveFromNull,
        ApproveToNull,
        InsufficientBalance,
        InsufficientAllowance,
        AllowanceUnderflow,
        AllowanceOverflow,
        /// Mint would push total supply past 2^255 - 1.
        SupplyCapExceeded,
        Overflow,
        Underflow,
        ExpiredDeadline,
        InvalidSignature,
        AlreadyInitialized,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(origin: OriginFor<T>, admin: Principal) -> DispatchResult {
            T::DeployOrigin::ensure_origin(origin)?;
            Self::do_initialize(admin).map_err(Self::reject)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: Principal, amount: U256) -> DispatchResult {
            let from = Self::principal_of(origin)?;
            Self::do_transfer(from, to, amount).map_err(Self::reject)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: Principal,
            to: Principal,
            amount: U256,
        ) -> DispatchResult {
            let spender = Self::principal_of(origin)?;
            Self::do_transfer_from(spender, from, to, amount).map_err(Self::reject)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: Principal, amount: U256) -> DispatchResult {
            let owner = Self::principal_of(origin)?;
            Self::do_approve(owner, spender, amount).map_err(Self::reject)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: Principal,
            added: U256,
        ) -> DispatchResult {
            let owner = Self::principal_of(origin)?;
            Self::do_increase_allowance(owner, spender, added).map_err(Self::reject)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: Principal,
            subtracted: U256,
        ) -> DispatchResult {
            let owner = Self::principal_of(origin)?;
            Self::do_decrease_allowance(owner, spender, subtracted).map_err(Self::reject)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: Principal, amount: U256) -> DispatchResult {
            let minter = Self::principal_of(origin)?;
            Self::do_mint(minter, to, amount).map_err(Self::reject)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: U256) -> DispatchResult {
            let burner = Self::principal_of(origin)?;
            Self::do_burn(burner, amount).map_err(Self::reject)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let actor = Self::principal_of(origin)?;
            Self::do_pause(actor).map_err(Self::reject)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let actor = Self::principal_of(origin)?;
            Self::do_unpause(actor).map_err(Self::reject)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::denylist())]
        pub fn denylist(origin: OriginFor<T>, target: Principal) -> DispatchResult {
            let actor = Self::principal_of(origin)?;
            Self::do_denylist(actor, target).map_err(Self::reject)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::undenylist())]
        pub fn undenylist(origin: OriginFor<T>, target: Principal) -> DispatchResult {
            let actor = Self::principal_of(origin)?;
            Self::do_undenylist(actor, target).map_err(Self::reject)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::destroy_denylisted_funds())]
        pub fn destroy_denylisted_funds(origin: OriginFor<T>, target: Principal) -> DispatchResult {
            let actor = Self::principal_of(origin)?;
            Self::do_destroy_denylisted_funds(actor, target).map(|_| ()).map_err(Self::reject)
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: Principal) -> DispatchResult {
            let sender = Self::principal_of(origin)?;
            Self::do_grant_role(sender, role, account).map_err(Self::reject)
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(origin: OriginFor<T>, role: Role, account: Principal) -> DispatchResult {
            let sender = Self::principal_of(origin)?;
            Self::do_revoke_role(sender, role, account).map_err(Self::reject)
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(
            origin: OriginFor<T>,
            role: Role,
            account: Principal,
        ) -> DispatchResult {
            let caller = Self::principal_of(origin)?;
            Self::do_renounce_role(caller, role, account).map_err(Self::reject)
        }

        /// Sets `owner`'s allowance for `spender` from an off-chain signature.
        /// Any signed origin may relay it.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::permit())]
        pub fn permit(
            origin: OriginFor<T>,
            owner: Principal,
            spender: Principal,
            value: U256,
            deadline: U256,
            v: u8,
            r: H256,
            s: H256,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_permit(owner, spender, value, deadline, v, r, s).map_err(Self::reject)
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::upgrade_to())]
        pub fn upgrade_to(
            origin: OriginFor<T>,
            implementation: H256,
            migration: Option<UpgradeCall>,
        ) -> DispatchResult {
            let caller = Self::principal_of(origin)?;
            Self::do_upgrade_to(caller, implementation, migration).map_err(Self::reject)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial default admin. When set, the first initializer step runs at genesis.
        pub admin: Option<Principal>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Initial balances (principal, amount)
        pub initial_balances: Vec<(Principal, U256)>,
        #[serde(skip)]
        pub _config: sp_std::marker::PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: NameBytes =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: SymbolBytes =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(admin) = self.admin {
                Pallet::<T>::do_initialize(admin).expect("Fresh genesis state is uninitialized");
            }

            let mut total = U256::zero();
            for (who, amount) in &self.initial_balances {
                assert!(*who != NULL_PRINCIPAL, "Genesis balance for the null principal");
                total = total
                    .checked_add(*amount)
                    .filter(|total| *total <= SUPPLY_CAP)
                    .expect("Initial balances exceed the supply cap");
                Balances::<T>::mutate(who, |slot| *slot = slot.with_balance(slot.balance() + *amount));
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> From<LedgerError> for Error<T> {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unauthorized { .. } => Error::Unauthorized,
            LedgerError::CanOnlyRenounceForSelf { .. } => Error::CanOnlyRenounceForSelf,
            LedgerError::SystemPaused => Error::SystemPaused,
            LedgerError::AlreadyPaused => Error::AlreadyPaused,
            LedgerError::NotPaused => Error::NotPaused,
            LedgerError::IsDenylisted(_) => Error::IsDenylisted,
            LedgerError::AlreadyDenylisted(_) => Error::AlreadyDenylisted,
            LedgerError::NotDenylisted(_) => Error::NotDenylisted,
            LedgerError::MintToNull => Error::MintToNull,
            LedgerError::BurnFromNull => Error::BurnFromNull,
            LedgerError::TransferFromNull => Error::TransferFromNull,
            LedgerError::TransferToNull => Error::TransferToNull,
            LedgerError::ApproveFromNull => Error::ApproveFromNull,
            LedgerError::ApproveToNull => Error::ApproveToNull,
            LedgerError::InsufficientBalance { .. } => Error::InsufficientBalance,
            LedgerError::InsufficientAllowance { .. } => Error::InsufficientAllowance,
            LedgerError::AllowanceUnderflow { .. } => Error::AllowanceUnderflow,
            LedgerError::AllowanceOverflow { .. } => Error::AllowanceOverflow,
            LedgerError::SupplyCapExceeded(_) => Error::SupplyCapExceeded,
            LedgerError::Overflow => Error::Overflow,
            LedgerError::Underflow => Error::Underflow,
            LedgerError::ExpiredDeadline { .. } => Error::ExpiredDeadline,
            LedgerError::InvalidSignature => Error::InvalidSignature,
            LedgerError::AlreadyInitialized { .. } => Error::AlreadyInitialized,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Principal a signed origin acts as.
    pub fn principal_of(origin: OriginFor<T>) -> Result<Principal, DispatchError> {
        let who = ensure_signed(origin)?;
        Ok(T::AddressMapping::convert(who))
    }

    fn reject(err: LedgerError) -> DispatchError {
        log::debug!(target: LOG_TARGET, "rejected ({:?}): {:?}", err.category(), err);
        Error::<T>::from(err).into()
    }

    /// Checks that balances add up to the total supply and stay within the cap.
    #[cfg(any(test, feature = "try-runtime"))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let mut sum = U256::zero();
        for (_, slot) in Balances::<T>::iter() {
            sum = sum.checked_add(slot.balance()).ok_or("Balance sum overflows")?;
        }
        ensure!(sum == TotalSupply::<T>::get(), "Balances do not add up to the total supply");
        ensure!(sum <= SUPPLY_CAP, "Total supply exceeds the cap");
        Ok(())
    }
}
