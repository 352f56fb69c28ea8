//! Flat 32-byte slot view of the ledger state.
//!
//! Each component owns a contiguous [`Region`] of slots: its fields first,
//! then a reserved gap that later versions may consume by appending fields.
//! Regions are never reordered. [`Pallet::read_slot`] renders any slot as the
//! word a storage-slot reader of the deployed ledger would see, which is what
//! the upgrade conformance tests compare across versions.

use sp_core::{H256, U256};
use sp_io::hashing::keccak_256;

use crate::{
    abi::{address_word, hash_words, u256_word},
    types::{Principal, Role},
    Allowances, Balances, Config, HashedName, HashedVersion, Implementation, Initialized, Nonces,
    Pallet, Paused, ReservedSlots, Roles, TokenName, TokenSymbol, TotalSupply,
};

/// Components in storage order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Region {
    Initializer,
    Context,
    Token,
    Pause,
    Introspection,
    AccessControl,
    UpgradeHooks,
    UpgradeGuard,
    Eip712,
    Permit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegionSpan {
    pub region: Region,
    pub start: u16,
    /// Slots holding live fields, from `start`.
    pub fields: u16,
    /// Total slots, fields plus gap.
    pub len: u16,
}

impl RegionSpan {
    pub const fn end(&self) -> u16 {
        self.start + self.len
    }

    pub fn contains(&self, slot: u16) -> bool {
        slot >= self.start && slot < self.end()
    }

    pub fn is_gap(&self, slot: u16) -> bool {
        self.contains(slot) && slot >= self.start + self.fields
    }
}

const fn span(region: Region, start: u16, fields: u16, len: u16) -> RegionSpan {
    RegionSpan { region, start, fields, len }
}

pub const LAYOUT: [RegionSpan; 10] = [
    span(Region::Initializer, 0, 1, 1),
    span(Region::Context, 1, 0, 50),
    span(Region::Token, 51, 5, 50),
    span(Region::Pause, 101, 1, 50),
    span(Region::Introspection, 151, 0, 50),
    span(Region::AccessControl, 201, 1, 50),
    span(Region::UpgradeHooks, 251, 0, 50),
    span(Region::UpgradeGuard, 301, 0, 50),
    span(Region::Eip712, 351, 2, 52),
    span(Region::Permit, 403, 2, 51),
];

pub const INITIALIZER_SLOT: u16 = 0;
pub const BALANCES_SLOT: u16 = 51;
pub const ALLOWANCES_SLOT: u16 = 52;
pub const TOTAL_SUPPLY_SLOT: u16 = 53;
pub const NAME_SLOT: u16 = 54;
pub const SYMBOL_SLOT: u16 = 55;
pub const PAUSED_SLOT: u16 = 101;
pub const ROLES_SLOT: u16 = 201;
pub const HASHED_NAME_SLOT: u16 = 351;
pub const HASHED_VERSION_SLOT: u16 = 352;
pub const NONCES_SLOT: u16 = 403;
/// Held the permit typehash in an earlier layout; always zero now.
pub const DEPRECATED_PERMIT_TYPEHASH_SLOT: u16 = 404;

/// EIP-1967 implementation slot, `keccak256("eip1967.proxy.implementation") - 1`.
pub const IMPLEMENTATION_SLOT: [u8; 32] = [
    0x36, 0x08, 0x94, 0xa1, 0x3b, 0xa1, 0xa3, 0x21, 0x06, 0x67, 0xc8, 0x28, 0x49, 0x2d, 0xb9, 0x8d,
    0xca, 0x3e, 0x20, 0x76, 0xcc, 0x37, 0x35, 0xa9, 0x20, 0xa3, 0xca, 0x50, 0x5d, 0x38, 0x2b, 0xbc,
];

pub fn region_of(slot: u16) -> Option<RegionSpan> {
    LAYOUT.iter().copied().find(|span| span.contains(slot))
}

/// Address of one word in the flat image.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlotKey {
    /// A sequential slot, including gap slots and mapping roots.
    Fixed(u16),
    Balance(Principal),
    Allowance { owner: Principal, spender: Principal },
    RoleMember { role: Role, account: Principal },
    Nonce(Principal),
    Implementation,
}

impl SlotKey {
    /// 32-byte slot position. Mapping entries live at
    /// `keccak256(pad(key) ‖ pad(slot))`, nested once per mapping level.
    pub fn position(&self) -> H256 {
        match self {
            SlotKey::Fixed(slot) => H256(u256_word(U256::from(*slot))),
            SlotKey::Balance(who) => mapping_entry(address_word(who), BALANCES_SLOT.into()),
            SlotKey::Allowance { owner, spender } => {
                let inner = mapping_entry(address_word(owner), ALLOWANCES_SLOT.into());
                hash_words(&[address_word(spender), inner.0])
            },
            SlotKey::RoleMember { role, account } => {
                // Members are the first field of the role's record.
                let record = mapping_entry(role.id().0, ROLES_SLOT.into());
                hash_words(&[address_word(account), record.0])
            },
            SlotKey::Nonce(who) => mapping_entry(address_word(who), NONCES_SLOT.into()),
            SlotKey::Implementation => H256(IMPLEMENTATION_SLOT),
        }
    }
}

fn mapping_entry(key: [u8; 32], slot: U256) -> H256 {
    hash_words(&[key, u256_word(slot)])
}

fn bool_word(value: bool) -> H256 {
    let mut word = [0u8; 32];
    word[31] = value as u8;
    H256(word)
}

/// Solidity storage encoding of a `string` header slot: up to 31 bytes are
/// stored inline, left-aligned, with `2 * len` in the last byte. Longer
/// strings store `2 * len + 1` and keep their bytes elsewhere.
pub fn string_word(bytes: &[u8]) -> H256 {
    let mut word = [0u8; 32];
    if bytes.len() < 32 {
        word[..bytes.len()].copy_from_slice(bytes);
        word[31] = (bytes.len() * 2) as u8;
        H256(word)
    } else {
        H256(u256_word(U256::from(bytes.len() * 2 + 1)))
    }
}

impl<T: Config> Pallet<T> {
    /// The word stored at `key` in the flat image.
    pub fn read_slot(key: SlotKey) -> H256 {
        match key {
            SlotKey::Fixed(slot) => Self::read_fixed_slot(slot),
            SlotKey::Balance(who) => H256(u256_word(Balances::<T>::get(who).raw())),
            SlotKey::Allowance { owner, spender } =>
                H256(u256_word(Allowances::<T>::get(owner, spender))),
            SlotKey::RoleMember { role, account } => bool_word(Roles::<T>::get(role, account)),
            SlotKey::Nonce(who) => H256(u256_word(Nonces::<T>::get(who))),
            SlotKey::Implementation => Implementation::<T>::get(),
        }
    }

    fn read_fixed_slot(slot: u16) -> H256 {
        match slot {
            INITIALIZER_SLOT => {
                // Byte 30 is the `initializing` flag, never set between calls.
                let mut word = [0u8; 32];
                word[31] = Initialized::<T>::get();
                H256(word)
            },
            TOTAL_SUPPLY_SLOT => H256(u256_word(TotalSupply::<T>::get())),
            NAME_SLOT => string_word(&TokenName::<T>::get()),
            SYMBOL_SLOT => string_word(&TokenSymbol::<T>::get()),
            PAUSED_SLOT => bool_word(Paused::<T>::get()),
            HASHED_NAME_SLOT => HashedName::<T>::get(),
            HASHED_VERSION_SLOT => HashedVersion::<T>::get(),
            BALANCES_SLOT | ALLOWANCES_SLOT | ROLES_SLOT | NONCES_SLOT |
            DEPRECATED_PERMIT_TYPEHASH_SLOT => H256::zero(),
            other => match region_of(other) {
                Some(span) if span.is_gap(other) => ReservedSlots::<T>::get(other),
                _ => H256::zero(),
            },
        }
    }
}
