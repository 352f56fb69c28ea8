use crate as pallet_glo_token;
use crate::types::{Principal, Role};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, UnixTime},
};
use sp_core::{H160, H256};
use sp_runtime::{
    traits::{BlakeTwo256, Convert, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GloToken: pallet_glo_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
/// Signs as the null principal.
pub const NOBODY: u64 = 0;

parameter_types! {
    pub const Deployer: u64 = ADMIN;
    pub const ChainId: u64 = 1;
    pub LedgerAddress: H160 = H160::repeat_byte(0x42);
    pub static Now: u64 = 1_700_000_000;
}

/// Account `n` acts as the principal whose low 8 bytes are `n`.
pub struct U64Principal;
impl Convert<u64, Principal> for U64Principal {
    fn convert(who: u64) -> Principal {
        H160::from_low_u64_be(who)
    }
}

pub struct MockTime;
impl UnixTime for MockTime {
    fn now() -> core::time::Duration {
        core::time::Duration::from_secs(Now::get())
    }
}

pub struct EnsureDeployer;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureDeployer {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == Deployer::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(Deployer::get()))
    }
}

impl pallet_glo_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type DeployOrigin = EnsureDeployer;
    type AddressMapping = U64Principal;
    type UnixTime = MockTime;
    type ChainId = ChainId;
    type LedgerAddress = LedgerAddress;
    type WeightInfo = ();
}

pub fn principal(who: u64) -> Principal {
    U64Principal::convert(who)
}

/// Grants `role` to account `who` without going through the admin check.
pub fn grant(role: Role, who: u64) {
    pallet_glo_token::Roles::<Test>::insert(role, principal(who), true);
}

fn build(admin: Option<Principal>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_glo_token::GenesisConfig::<Test> {
        admin,
        token_name: b"Glo Dollar".to_vec(),
        token_symbol: b"USDGLO".to_vec(),
        initial_balances: vec![],
        _config: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(Some(principal(ADMIN)))
}

/// Genesis without an admin: the initializer has not run yet.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(None)
}
