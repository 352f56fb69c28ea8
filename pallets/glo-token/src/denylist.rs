//! Denylist administration.
//!
//! The flag lives in bit 255 of the principal's balance slot, so toggling it
//! and destroying funds both rewrite the same [`AccountSlot`](crate::types::AccountSlot).

use frame_support::ensure;
use sp_core::U256;

use crate::{
    guard::Guards,
    types::{LedgerError, Principal, Role, NULL_PRINCIPAL},
    Balances, Config, Event, Pallet, TotalSupply,
};

impl<T: Config> Pallet<T> {
    pub fn is_denylisted(who: &Principal) -> bool {
        Balances::<T>::get(who).is_denylisted()
    }

    pub fn do_denylist(actor: Principal, target: Principal) -> Result<(), LedgerError> {
        Guards::new().only_role(Role::Denylister, actor).check::<T>()?;
        let slot = Balances::<T>::get(target);
        ensure!(!slot.is_denylisted(), LedgerError::AlreadyDenylisted(target));

        Balances::<T>::insert(target, slot.with_denylisted(true));
        Self::deposit_event(Event::Denylisted { actor, target });
        Ok(())
    }

    pub fn do_undenylist(actor: Principal, target: Principal) -> Result<(), LedgerError> {
        Guards::new().only_role(Role::Denylister, actor).check::<T>()?;
        let slot = Balances::<T>::get(target);
        ensure!(slot.is_denylisted(), LedgerError::NotDenylisted(target));

        Balances::<T>::insert(target, slot.with_denylisted(false));
        Self::deposit_event(Event::Undenylisted { actor, target });
        Ok(())
    }

    /// Burns the whole balance of a denylisted principal. The flag stays set.
    /// Returns the destroyed amount.
    pub fn do_destroy_denylisted_funds(
        actor: Principal,
        target: Principal,
    ) -> Result<U256, LedgerError> {
        Guards::new().only_role(Role::Denylister, actor).check::<T>()?;
        let slot = Balances::<T>::get(target);
        ensure!(slot.is_denylisted(), LedgerError::NotDenylisted(target));

        let amount = slot.balance();
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(LedgerError::Underflow)?;

        Balances::<T>::insert(target, slot.with_balance(U256::zero()));
        TotalSupply::<T>::put(supply);
        Self::deposit_event(Event::Transferred { from: target, to: NULL_PRINCIPAL, amount });
        Self::deposit_event(Event::DenylistedFundsDestroyed { actor, target, amount });
        Ok(amount)
    }
}
