//! Initializer versioning and in-place upgrades.
//!
//! The `Initialized` counter records how many initializer steps have run.
//! [`Pallet::do_initialize`] is step 1; each later step arrives as an
//! [`UpgradeCall::Reinitialize`] carried by `upgrade_to` and must name a
//! version strictly above the current one.

use frame_support::ensure;
use sp_core::H256;
use sp_io::hashing::keccak_256;

use crate::{
    guard::Guards,
    types::{LedgerError, NameBytes, Principal, Role, SymbolBytes, UpgradeCall, DOMAIN_VERSION},
    Config, Event, HashedName, HashedVersion, Implementation, Initialized, Pallet, TokenName,
    TokenSymbol, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    pub fn initialized_version() -> u8 {
        Initialized::<T>::get()
    }

    /// First initializer step: seeds the EIP-712 name/version hashes from the
    /// stored token name and makes `admin` the default admin.
    pub fn do_initialize(admin: Principal) -> Result<(), LedgerError> {
        let version = Initialized::<T>::get();
        ensure!(version == 0, LedgerError::AlreadyInitialized { version });

        HashedName::<T>::put(H256(keccak_256(&TokenName::<T>::get())));
        HashedVersion::<T>::put(H256(keccak_256(DOMAIN_VERSION)));
        Self::grant_role_unchecked(Role::DefaultAdmin, admin, admin);
        Initialized::<T>::put(1);
        Self::deposit_event(Event::Initialized { version: 1 });
        Ok(())
    }

    /// Records `implementation` as the active code reference and runs the
    /// optional one-time migration `call` with it.
    pub fn do_upgrade_to(
        caller: Principal,
        implementation: H256,
        call: Option<UpgradeCall>,
    ) -> Result<(), LedgerError> {
        Guards::new().only_role(Role::Upgrader, caller).check::<T>()?;
        if let Some(UpgradeCall::Reinitialize { version, .. }) = &call {
            let current = Initialized::<T>::get();
            ensure!(current < *version, LedgerError::AlreadyInitialized { version: current });
        }

        Implementation::<T>::put(implementation);
        Self::deposit_event(Event::Upgraded { implementation });
        log::info!(target: LOG_TARGET, "upgraded to implementation {:?}", implementation);

        if let Some(UpgradeCall::Reinitialize { version, name, symbol }) = call {
            Self::reinitialize(version, name, symbol);
        }
        Ok(())
    }

    /// Rebrands the token and re-derives the domain name hash. The caller has
    /// already checked that `version` is above the current counter.
    fn reinitialize(version: u8, name: NameBytes, symbol: SymbolBytes) {
        HashedName::<T>::put(H256(keccak_256(&name)));
        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        Initialized::<T>::put(version);
        Self::deposit_event(Event::Initialized { version });
        log::info!(target: LOG_TARGET, "reinitialized at version {}", version);
    }
}
