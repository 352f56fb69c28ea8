//! Balances, allowances and supply.
//!
//! Every `do_*` function runs its guard chain and all business checks before
//! the first storage write, so a rejected call leaves state untouched even
//! when it is invoked outside a dispatch transaction.

use frame_support::ensure;
use sp_core::U256;

use crate::{
    guard::Guards,
    types::{LedgerError, Principal, Role, DECIMALS, NULL_PRINCIPAL, SUPPLY_CAP, UNLIMITED_ALLOWANCE},
    Allowances, Balances, Config, Event, Pallet, TotalSupply,
};

impl<T: Config> Pallet<T> {
    pub fn decimals() -> u8 {
        DECIMALS
    }

    pub fn balance_of(who: &Principal) -> U256 {
        Balances::<T>::get(who).balance()
    }

    pub fn allowance(owner: &Principal, spender: &Principal) -> U256 {
        Allowances::<T>::get(owner, spender)
    }

    pub fn do_transfer(from: Principal, to: Principal, amount: U256) -> Result<(), LedgerError> {
        Guards::new().when_not_paused().not_denylisted(from).not_denylisted(to).check::<T>()?;
        Self::ensure_transfer_parties(&from, &to)?;
        let (from_balance, to_balance) = Self::balances_after_move(&from, &to, amount)?;

        Self::write_move(from, to, amount, from_balance, to_balance);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance unless it is [`UNLIMITED_ALLOWANCE`].
    pub fn do_transfer_from(
        spender: Principal,
        from: Principal,
        to: Principal,
        amount: U256,
    ) -> Result<(), LedgerError> {
        Guards::new()
            .when_not_paused()
            .not_denylisted(from)
            .not_denylisted(to)
            .not_denylisted(spender)
            .check::<T>()?;

        let allowance = Allowances::<T>::get(from, spender);
        let remaining = if allowance == UNLIMITED_ALLOWANCE {
            None
        } else {
            let remaining = allowance.checked_sub(amount).ok_or(
                LedgerError::InsufficientAllowance { owner: from, spender, allowance, needed: amount },
            )?;
            Some(remaining)
        };
        Self::ensure_transfer_parties(&from, &to)?;
        let (from_balance, to_balance) = Self::balances_after_move(&from, &to, amount)?;

        if let Some(remaining) = remaining {
            Self::write_allowance(from, spender, remaining);
        }
        Self::write_move(from, to, amount, from_balance, to_balance);
        Ok(())
    }

    pub fn do_approve(owner: Principal, spender: Principal, amount: U256) -> Result<(), LedgerError> {
        Guards::new().when_not_paused().not_denylisted(owner).not_denylisted(spender).check::<T>()?;
        Self::ensure_approve_parties(&owner, &spender)?;

        Self::write_allowance(owner, spender, amount);
        Ok(())
    }

    pub fn do_increase_allowance(
        owner: Principal,
        spender: Principal,
        added: U256,
    ) -> Result<(), LedgerError> {
        Guards::new().when_not_paused().not_denylisted(owner).not_denylisted(spender).check::<T>()?;
        Self::ensure_approve_parties(&owner, &spender)?;
        let amount = Allowances::<T>::get(owner, spender)
            .checked_add(added)
            .ok_or(LedgerError::AllowanceOverflow { owner, spender })?;

        Self::write_allowance(owner, spender, amount);
        Ok(())
    }

    pub fn do_decrease_allowance(
        owner: Principal,
        spender: Principal,
        subtracted: U256,
    ) -> Result<(), LedgerError> {
        Guards::new().when_not_paused().not_denylisted(owner).not_denylisted(spender).check::<T>()?;
        Self::ensure_approve_parties(&owner, &spender)?;
        let allowance = Allowances::<T>::get(owner, spender);
        let amount = allowance.checked_sub(subtracted).ok_or(LedgerError::AllowanceUnderflow {
            owner,
            spender,
            allowance,
            subtracted,
        })?;

        Self::write_allowance(owner, spender, amount);
        Ok(())
    }

    pub fn do_mint(minter: Principal, to: Principal, amount: U256) -> Result<(), LedgerError> {
        Guards::new()
            .when_not_paused()
            .not_denylisted(minter)
            .not_denylisted(to)
            .only_role(Role::Minter, minter)
            .check::<T>()?;
        ensure!(to != NULL_PRINCIPAL, LedgerError::MintToNull);

        let supply = TotalSupply::<T>::get()
            .checked_add(amount)
            .filter(|supply| *supply <= SUPPLY_CAP)
            .ok_or(LedgerError::SupplyCapExceeded(amount))?;
        let slot = Balances::<T>::get(to);
        let balance = slot.balance().checked_add(amount).ok_or(LedgerError::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, slot.with_balance(balance));
        Self::deposit_event(Event::Transferred { from: NULL_PRINCIPAL, to, amount });
        Self::deposit_event(Event::Minted { minter, to, amount });
        Ok(())
    }

    /// Burns from the caller's own balance. Burn authority is the minter role.
    pub fn do_burn(burner: Principal, amount: U256) -> Result<(), LedgerError> {
        Guards::new()
            .when_not_paused()
            .not_denylisted(burner)
            .only_role(Role::Minter, burner)
            .check::<T>()?;
        ensure!(burner != NULL_PRINCIPAL, LedgerError::BurnFromNull);

        let slot = Balances::<T>::get(burner);
        let balance = slot.balance();
        let remaining = balance.checked_sub(amount).ok_or(LedgerError::InsufficientBalance {
            account: burner,
            balance,
            needed: amount,
        })?;
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(LedgerError::Underflow)?;

        Balances::<T>::insert(burner, slot.with_balance(remaining));
        TotalSupply::<T>::put(supply);
        Self::deposit_event(Event::Transferred { from: burner, to: NULL_PRINCIPAL, amount });
        Self::deposit_event(Event::Burned { burner, amount });
        Ok(())
    }

    fn ensure_transfer_parties(from: &Principal, to: &Principal) -> Result<(), LedgerError> {
        ensure!(*from != NULL_PRINCIPAL, LedgerError::TransferFromNull);
        ensure!(*to != NULL_PRINCIPAL, LedgerError::TransferToNull);
        Ok(())
    }

    pub(crate) fn ensure_approve_parties(
        owner: &Principal,
        spender: &Principal,
    ) -> Result<(), LedgerError> {
        ensure!(*owner != NULL_PRINCIPAL, LedgerError::ApproveFromNull);
        ensure!(*spender != NULL_PRINCIPAL, LedgerError::ApproveToNull);
        Ok(())
    }

    /// Balances of `from` and `to` once `amount` has moved. Equal when
    /// `from == to`.
    fn balances_after_move(
        from: &Principal,
        to: &Principal,
        amount: U256,
    ) -> Result<(U256, U256), LedgerError> {
        let balance = Self::balance_of(from);
        let from_balance = balance.checked_sub(amount).ok_or(LedgerError::InsufficientBalance {
            account: *from,
            balance,
            needed: amount,
        })?;
        if from == to {
            return Ok((balance, balance));
        }
        let to_balance = Self::balance_of(to).checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok((from_balance, to_balance))
    }

    fn write_move(from: Principal, to: Principal, amount: U256, from_balance: U256, to_balance: U256) {
        if from != to {
            Balances::<T>::mutate(from, |slot| *slot = slot.with_balance(from_balance));
            Balances::<T>::mutate(to, |slot| *slot = slot.with_balance(to_balance));
        }
        Self::deposit_event(Event::Transferred { from, to, amount });
    }

    pub(crate) fn write_allowance(owner: Principal, spender: Principal, amount: U256) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approved { owner, spender, amount });
    }
}
