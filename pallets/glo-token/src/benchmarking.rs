//! Benchmarking setup for pallet-glo-token

use super::*;

#[allow(unused)]
use crate::Pallet as GloToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn as_principal<T: Config>(who: &T::AccountId) -> Principal {
    T::AddressMapping::convert(who.clone())
}

fn with_balance<T: Config>(who: Principal, amount: U256) {
    Balances::<T>::mutate(who, |slot| *slot = slot.with_balance(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Initialized::<T>::kill();
        let admin: T::AccountId = account("admin", 0, 0);
        let origin = T::DeployOrigin::try_successful_origin().expect("Deploy origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, as_principal::<T>(&admin));

        assert_eq!(Initialized::<T>::get(), 1);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = U256::from(1_000_000u64);
        with_balance::<T>(as_principal::<T>(&caller), U256::from(10_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), as_principal::<T>(&recipient), amount);

        assert_eq!(GloToken::<T>::balance_of(&as_principal::<T>(&recipient)), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = U256::from(1_000_000u64);
        let (owner_p, spender_p) = (as_principal::<T>(&owner), as_principal::<T>(&spender));
        with_balance::<T>(owner_p, U256::from(10_000_000u64));
        Allowances::<T>::insert(owner_p, spender_p, U256::from(5_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), owner_p, as_principal::<T>(&recipient), amount);

        assert_eq!(Allowances::<T>::get(owner_p, spender_p), U256::from(4_000_000u64));
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender = as_principal::<T>(&account("spender", 0, 0));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender, UNLIMITED_ALLOWANCE);

        assert_eq!(Allowances::<T>::get(as_principal::<T>(&caller), spender), UNLIMITED_ALLOWANCE);
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender = as_principal::<T>(&account("spender", 0, 0));
        Allowances::<T>::insert(as_principal::<T>(&caller), spender, U256::from(100u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender, U256::from(50u64));

        assert_eq!(Allowances::<T>::get(as_principal::<T>(&caller), spender), U256::from(150u64));
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender = as_principal::<T>(&account("spender", 0, 0));
        Allowances::<T>::insert(as_principal::<T>(&caller), spender, U256::from(100u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender, U256::from(50u64));

        assert_eq!(Allowances::<T>::get(as_principal::<T>(&caller), spender), U256::from(50u64));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Minter, as_principal::<T>(&caller), true);
        let recipient = as_principal::<T>(&account("recipient", 0, 0));
        let amount = U256::from(1_000_000u64);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient, amount);

        assert_eq!(GloToken::<T>::balance_of(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let burner = as_principal::<T>(&caller);
        Roles::<T>::insert(Role::Minter, burner, true);
        with_balance::<T>(burner, U256::from(1_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), U256::from(400_000u64));

        assert_eq!(GloToken::<T>::balance_of(&burner), U256::from(600_000u64));
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Pauser, as_principal::<T>(&caller), true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Pauser, as_principal::<T>(&caller), true);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn denylist() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Denylister, as_principal::<T>(&caller), true);
        let target = as_principal::<T>(&account("target", 0, 0));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target);

        assert!(GloToken::<T>::is_denylisted(&target));
    }

    #[benchmark]
    fn undenylist() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Denylister, as_principal::<T>(&caller), true);
        let target = as_principal::<T>(&account("target", 0, 0));
        Balances::<T>::mutate(target, |slot| *slot = slot.with_denylisted(true));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target);

        assert!(!GloToken::<T>::is_denylisted(&target));
    }

    #[benchmark]
    fn destroy_denylisted_funds() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Denylister, as_principal::<T>(&caller), true);
        let target = as_principal::<T>(&account("target", 0, 0));
        with_balance::<T>(target, U256::from(1_000_000u64));
        Balances::<T>::mutate(target, |slot| *slot = slot.with_denylisted(true));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target);

        assert_eq!(GloToken::<T>::balance_of(&target), U256::zero());
        assert!(GloToken::<T>::is_denylisted(&target));
    }

    #[benchmark]
    fn grant_role() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::DefaultAdmin, as_principal::<T>(&caller), true);
        let account = as_principal::<T>(&account("member", 0, 0));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, account);

        assert!(GloToken::<T>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::DefaultAdmin, as_principal::<T>(&caller), true);
        let account = as_principal::<T>(&account("member", 0, 0));
        Roles::<T>::insert(Role::Minter, account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, account);

        assert!(!GloToken::<T>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        let account = as_principal::<T>(&caller);
        Roles::<T>::insert(Role::Minter, account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, account);

        assert!(!GloToken::<T>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn upgrade_to() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Upgrader, as_principal::<T>(&caller), true);
        let implementation = H256::repeat_byte(0x77);
        let migration = UpgradeCall::Reinitialize {
            version: Initialized::<T>::get().saturating_add(1),
            name: NameBytes::truncate_from(b"Glo Dollar v2".to_vec()),
            symbol: SymbolBytes::truncate_from(b"USDGLO".to_vec()),
        };

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), implementation, Some(migration));

        assert_eq!(Implementation::<T>::get(), implementation);
    }

    impl_benchmark_test_suite!(GloToken, crate::mock::new_test_ext(), crate::mock::Test);
}
