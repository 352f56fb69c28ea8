//! Storage migrations for pallet-glo-token.
//!
//! Each migration is versioned against the pallet's on-chain
//! `StorageVersion` and runs exactly once; re-running it, or running it on a
//! chain that is already past its target version, only costs the version read.
//!
//! # History
//!
//! - **v1**: denylist membership lived in its own `Denylisted` map next to a
//!   plain balance map.
//! - **v2**: the flag moved into bit 255 of the principal's balance slot
//!   ([`AccountSlot`]), which the supply cap keeps free. [`v2::MigrateToV2`]
//!   folds every legacy entry into its slot and drains the old map.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_glo_token::migrations::v2::MigrateToV2<Runtime>,
//! >;
//! ```
//!
//! Migrations must be applied in order and never skip a version.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{types::AccountSlot, Balances, Config, Pallet, LOG_TARGET};

/// Storage as laid out at version 1.
pub mod v1 {
    use super::*;
    use crate::types::Principal;

    #[frame_support::storage_alias]
    pub type Denylisted<T: Config> =
        StorageMap<Pallet<T>, Blake2_128Concat, Principal, bool, ValueQuery>;
}

pub mod v2 {
    use super::*;

    /// Moves the standalone denylist into the packed balance slots.
    pub struct MigrateToV2<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 2 {
                let mut migrated: u64 = 0;
                let mut dropped: u64 = 0;
                for (who, denylisted) in v1::Denylisted::<T>::drain() {
                    if denylisted {
                        Balances::<T>::mutate(who, |slot: &mut AccountSlot| {
                            *slot = slot.with_denylisted(true)
                        });
                        migrated += 1;
                    } else {
                        dropped += 1;
                    }
                }

                StorageVersion::new(2).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated denylist to packed balance slots: {} flagged, {} stale entries dropped",
                    migrated,
                    dropped
                );

                let entries = migrated + dropped;
                // Per entry: drain read + delete, slot read + write. Plus version read/write.
                T::DbWeight::get().reads_writes(2 * entries + 1, entries + migrated + 1)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v2 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let flagged = v1::Denylisted::<T>::iter_values().filter(|flag| *flag).count() as u64;
            let already_packed =
                Balances::<T>::iter_values().filter(|slot| slot.is_denylisted()).count() as u64;
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: version {:?}, {} legacy denylist entries",
                on_chain_version,
                flagged
            );
            Ok((flagged, already_packed).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (flagged, already_packed): (u64, u64) = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 2,
                sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
            );
            ensure!(
                v1::Denylisted::<T>::iter_keys().next().is_none(),
                sp_runtime::TryRuntimeError::Other("Legacy denylist map not drained")
            );
            let packed =
                Balances::<T>::iter_values().filter(|slot| slot.is_denylisted()).count() as u64;
            ensure!(
                packed <= flagged + already_packed && packed >= flagged.max(already_packed),
                sp_runtime::TryRuntimeError::Other("Denylist flags lost in migration")
            );
            Ok(())
        }
    }
}
