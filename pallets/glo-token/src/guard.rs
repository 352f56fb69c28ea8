//! Guard pipeline shared by every mutating operation.
//!
//! A [`Guards`] chain is assembled per call and checked before any state is
//! touched. Stages always run in the same order, regardless of how the chain
//! was built: pause switch, then denylist (in the order principals were
//! added), then role registry. Business rules run afterwards, in the
//! operation body.

use frame_support::ensure;
use sp_std::vec::Vec;

use crate::{
    types::{LedgerError, Principal, Role},
    Config, Pallet, Paused,
};

#[derive(Default)]
pub(crate) struct Guards {
    when_not_paused: bool,
    not_denylisted: Vec<Principal>,
    only_role: Option<(Role, Principal)>,
}

impl Guards {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn when_not_paused(mut self) -> Self {
        self.when_not_paused = true;
        self
    }

    /// Rejects the call with `IsDenylisted(who)` if `who` is denylisted.
    /// Repeated principals are checked once.
    pub(crate) fn not_denylisted(mut self, who: Principal) -> Self {
        if !self.not_denylisted.contains(&who) {
            self.not_denylisted.push(who);
        }
        self
    }

    pub(crate) fn only_role(mut self, role: Role, who: Principal) -> Self {
        self.only_role = Some((role, who));
        self
    }

    pub(crate) fn check<T: Config>(self) -> Result<(), LedgerError> {
        if self.when_not_paused {
            ensure!(!Paused::<T>::get(), LedgerError::SystemPaused);
        }
        for who in self.not_denylisted {
            ensure!(!Pallet::<T>::is_denylisted(&who), LedgerError::IsDenylisted(who));
        }
        if let Some((role, who)) = self.only_role {
            Pallet::<T>::ensure_role(role, &who)?;
        }
        Ok(())
    }
}
