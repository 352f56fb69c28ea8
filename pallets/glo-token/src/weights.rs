//! Weights for pallet-glo-token.
//!
//! Hand-estimated from the storage each call touches until the benchmarks in
//! `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-glo-token.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn denylist() -> Weight;
    fn undenylist() -> Weight;
    fn destroy_denylisted_funds() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn permit() -> Weight;
    fn upgrade_to() -> Weight;
}

/// Weights for pallet-glo-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Initialized, TokenName, Roles. Writes: HashedName, HashedVersion, Roles, Initialized.
    fn initialize() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 4))
    }
    // Reads: Paused, Balances (from, to). Writes: Balances (from, to).
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    // Reads: Paused, Balances (from, to, spender), Allowances. Writes: Allowances, Balances (from, to).
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(5, 3))
    }
    // Reads: Paused, Balances (owner, spender). Writes: Allowances.
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 1))
    }
    // Reads: Paused, Balances (minter, to), Roles, TotalSupply. Writes: TotalSupply, Balances.
    fn mint() -> Weight {
        Weight::from_parts(27_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(26_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn denylist() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn undenylist() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn destroy_denylisted_funds() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(13_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Dominated by secp256k1 recovery.
    // Reads: Paused, Balances (owner, spender), HashedName, HashedVersion, Nonces. Writes: Nonces, Allowances.
    fn permit() -> Weight {
        Weight::from_parts(75_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(6, 2))
    }
    // Upper bound: includes the optional reinitializer step.
    fn upgrade_to() -> Weight {
        Weight::from_parts(24_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 5))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 4))
    }
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(19_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(27_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(26_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn denylist() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn undenylist() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn destroy_denylisted_funds() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(13_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn permit() -> Weight {
        Weight::from_parts(75_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(6, 2))
    }
    fn upgrade_to() -> Weight {
        Weight::from_parts(24_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 5))
    }
}
