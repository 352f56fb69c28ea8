//! Global pause switch.

use frame_support::ensure;

use crate::{
    guard::Guards,
    types::{LedgerError, Principal, Role},
    Config, Event, Pallet, Paused,
};

impl<T: Config> Pallet<T> {
    pub fn do_pause(actor: Principal) -> Result<(), LedgerError> {
        Guards::new().only_role(Role::Pauser, actor).check::<T>()?;
        ensure!(!Paused::<T>::get(), LedgerError::AlreadyPaused);

        Paused::<T>::put(true);
        Self::deposit_event(Event::Paused { actor });
        Ok(())
    }

    pub fn do_unpause(actor: Principal) -> Result<(), LedgerError> {
        Guards::new().only_role(Role::Pauser, actor).check::<T>()?;
        ensure!(Paused::<T>::get(), LedgerError::NotPaused);

        Paused::<T>::put(false);
        Self::deposit_event(Event::Unpaused { actor });
        Ok(())
    }
}
