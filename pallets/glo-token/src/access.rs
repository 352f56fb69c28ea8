//! Role registry.

use frame_support::ensure;

use crate::{
    guard::Guards,
    types::{LedgerError, Principal, Role},
    Config, Event, Pallet, Roles,
};

impl<T: Config> Pallet<T> {
    pub fn has_role(role: Role, who: &Principal) -> bool {
        Roles::<T>::get(role, who)
    }

    /// Role whose members may grant and revoke `role`.
    pub fn role_admin(role: Role) -> Role {
        role.admin()
    }

    pub(crate) fn ensure_role(role: Role, who: &Principal) -> Result<(), LedgerError> {
        ensure!(
            Self::has_role(role, who),
            LedgerError::Unauthorized { role, account: *who }
        );
        Ok(())
    }

    pub fn do_grant_role(
        sender: Principal,
        role: Role,
        account: Principal,
    ) -> Result<(), LedgerError> {
        Guards::new().only_role(role.admin(), sender).check::<T>()?;
        Self::grant_role_unchecked(role, account, sender);
        Ok(())
    }

    pub fn do_revoke_role(
        sender: Principal,
        role: Role,
        account: Principal,
    ) -> Result<(), LedgerError> {
        Guards::new().only_role(role.admin(), sender).check::<T>()?;
        Self::revoke_role_unchecked(role, account, sender);
        Ok(())
    }

    /// Drops `role` from the caller. `account` must be the caller itself.
    pub fn do_renounce_role(
        caller: Principal,
        role: Role,
        account: Principal,
    ) -> Result<(), LedgerError> {
        ensure!(account == caller, LedgerError::CanOnlyRenounceForSelf { account, caller });
        Self::revoke_role_unchecked(role, account, caller);
        Ok(())
    }

    pub(crate) fn grant_role_unchecked(role: Role, account: Principal, sender: Principal) {
        if Self::has_role(role, &account) {
            return;
        }
        Roles::<T>::insert(role, account, true);
        Self::deposit_event(Event::RoleGranted { role, account, sender });
    }

    pub(crate) fn revoke_role_unchecked(role: Role, account: Principal, sender: Principal) {
        if !Self::has_role(role, &account) {
            return;
        }
        Roles::<T>::remove(role, account);
        Self::deposit_event(Event::RoleRevoked { role, account, sender });
    }
}
