// Shared blackbox setup for the asset pool tests.
//
// The poll engine is replaced by two mock contracts: the factory mock hands
// out pre-deployed poll mocks in queue order, and the tests send the outcome
// callbacks from the poll mock addresses, exactly as a finalized poll would.

#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::scenario_model::Log;

use asset_pool::asset_pool_proxy::AssetPoolProxy;
use asset_pool::types::Reward;
use poll_factory_mock::poll_factory_mock_proxy::PollFactoryMockProxy;
use poll_mock::poll_mock_proxy::PollMockProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const MEMBER: TestAddress = TestAddress::new("member");
pub const SECOND_MEMBER: TestAddress = TestAddress::new("second-member");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const POOL: TestSCAddress = TestSCAddress::new("asset-pool");
pub const FACTORY: TestSCAddress = TestSCAddress::new("poll-factory");
pub const POLL_0: TestSCAddress = TestSCAddress::new("poll-0");
pub const POLL_1: TestSCAddress = TestSCAddress::new("poll-1");
pub const POLL_2: TestSCAddress = TestSCAddress::new("poll-2");
pub const POLL_3: TestSCAddress = TestSCAddress::new("poll-3");

pub const POOL_CODE: MxscPath = MxscPath::new("output/asset-pool.mxsc.json");
pub const FACTORY_CODE: MxscPath =
    MxscPath::new("mocks/poll-factory-mock/output/poll-factory-mock.mxsc.json");
pub const POLL_CODE: MxscPath = MxscPath::new("mocks/poll-mock/output/poll-mock.mxsc.json");

pub const TOKEN_ID: &str = "POOL-123456";
pub const TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(TOKEN_ID);
pub const OTHER_TOKEN_ID: &str = "OTHER-123456";
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(OTHER_TOKEN_ID);

pub const START_TIME: u64 = 1_000;
pub const INITIAL_BALANCE: u64 = 1_000;
pub const DEFAULT_POLL_DURATION: u64 = 86_400;

/// The first log emitted under `identifier`; contract events carry their
/// name as topic 0, builtin transfers do not.
pub fn find_event<'a>(logs: &'a [Log], identifier: &str) -> &'a Log {
    logs.iter()
        .find(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .unwrap_or_else(|| panic!("no {identifier} event in {logs:?}"))
}

pub fn assert_event(logs: &[Log], identifier: &str, topics: &[Vec<u8>], data: Vec<u8>) {
    let log = find_event(logs, identifier);
    assert_eq!(&log.topics[1..], topics, "{identifier} topics");
    assert_eq!(log.data, vec![data], "{identifier} data");
}

/// Top-encoded bytes, the way event topics and data are written.
pub fn encoded<T: TopEncode>(value: T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(&value)
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_CODE, asset_pool::ContractBuilder);
    blockchain.register_contract(FACTORY_CODE, poll_factory_mock::ContractBuilder);
    blockchain.register_contract(POLL_CODE, poll_mock::ContractBuilder);
    blockchain
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
}

impl PoolTestState {
    /// Deploys the factory mock with four queued poll mocks, then the pool,
    /// and admits MEMBER and SECOND_MEMBER. OUTSIDER holds tokens but is not
    /// a member.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        for account in [MEMBER, SECOND_MEMBER, OUTSIDER] {
            world
                .account(account)
                .nonce(1)
                .esdt_balance(TOKEN, INITIAL_BALANCE)
                .esdt_balance(OTHER_TOKEN, INITIAL_BALANCE);
        }
        world.current_block().block_timestamp(START_TIME);

        world
            .tx()
            .from(OWNER)
            .typed(PollFactoryMockProxy)
            .init()
            .code(FACTORY_CODE)
            .new_address(FACTORY)
            .run();

        for poll in [POLL_0, POLL_1, POLL_2, POLL_3] {
            world
                .tx()
                .from(OWNER)
                .to(FACTORY)
                .typed(PollFactoryMockProxy)
                .queue_poll(poll.to_address())
                .run();

            world
                .tx()
                .from(OWNER)
                .typed(PollMockProxy)
                .init()
                .code(POLL_CODE)
                .new_address(poll)
                .run();
        }

        world
            .tx()
            .from(OWNER)
            .typed(AssetPoolProxy)
            .init(
                OWNER.to_address(),
                TokenIdentifier::<StaticApi>::from(TOKEN_ID),
                FACTORY.to_address(),
            )
            .code(POOL_CODE)
            .new_address(POOL)
            .run();

        let mut state = Self { world };
        state.add_member(MEMBER);
        state.add_member(SECOND_MEMBER);
        state
    }

    // ── Access control ──

    pub fn add_member(&mut self, member: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(POOL)
            .typed(AssetPoolProxy)
            .add_member(member.to_address())
            .run();
    }

    pub fn remove_member(&mut self, member: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(POOL)
            .typed(AssetPoolProxy)
            .remove_member(member.to_address())
            .run();
    }

    // ── Treasury ──

    pub fn deposit(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(POOL)
            .typed(AssetPoolProxy)
            .deposit()
            .single_esdt(&TokenIdentifier::from(TOKEN_ID), 0, &BigUint::from(amount))
            .run();
    }

    pub fn check_treasury(&mut self, expected: u64) {
        self.world.check_account(POOL).esdt_balance(TOKEN, expected);
        self.world
            .query()
            .to(POOL)
            .typed(AssetPoolProxy)
            .get_treasury_balance()
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Rewards ──

    pub fn add_reward(&mut self, amount: u64, duration: u64) -> Address {
        self.world
            .tx()
            .from(OWNER)
            .to(POOL)
            .typed(AssetPoolProxy)
            .add_reward(amount, duration)
            .returns(ReturnsResult)
            .run()
            .to_address()
    }

    pub fn update_reward(
        &mut self,
        from: TestAddress,
        id: u64,
        amount: u64,
        duration: u64,
    ) -> Address {
        self.world
            .tx()
            .from(from)
            .to(POOL)
            .typed(AssetPoolProxy)
            .update_reward(id, amount, duration)
            .returns(ReturnsResult)
            .run()
            .to_address()
    }

    /// Sends the reward outcome callback from `poll`.
    pub fn finish_reward_poll(
        &mut self,
        poll: TestSCAddress,
        id: u64,
        amount: u64,
        duration: u64,
        agree: bool,
    ) {
        self.world
            .tx()
            .from(poll)
            .to(POOL)
            .typed(AssetPoolProxy)
            .on_reward_poll_finish(id, amount, duration, agree)
            .run();
    }

    pub fn finalize(&mut self, poll: TestSCAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(poll)
            .typed(PollMockProxy)
            .set_finalized(true)
            .run();
    }

    pub fn reward(&mut self, id: u64) -> Reward<StaticApi> {
        self.world
            .query()
            .to(POOL)
            .typed(AssetPoolProxy)
            .get_reward(id)
            .returns(ReturnsResult)
            .run()
    }

    /// Adds a reward and has its first poll approve `amount`.
    pub fn add_enabled_reward(&mut self, poll: TestSCAddress, amount: u64, duration: u64) {
        self.add_reward(amount, duration);
        let id = self.reward_count() - 1;
        self.finish_reward_poll(poll.clone(), id, amount, duration, true);
        self.finalize(poll);
    }

    pub fn reward_count(&mut self) -> u64 {
        self.world
            .query()
            .to(POOL)
            .typed(AssetPoolProxy)
            .reward_count()
            .returns(ReturnsResult)
            .run()
    }

    // ── Withdrawals ──

    pub fn claim_withdraw(&mut self, from: TestAddress, id: u64) -> Address {
        self.world
            .tx()
            .from(from)
            .to(POOL)
            .typed(AssetPoolProxy)
            .claim_withdraw(id)
            .returns(ReturnsResult)
            .run()
            .to_address()
    }

    pub fn propose_withdraw(
        &mut self,
        from: TestAddress,
        amount: u64,
        beneficiary: TestAddress,
    ) -> Address {
        self.world
            .tx()
            .from(from)
            .to(POOL)
            .typed(AssetPoolProxy)
            .propose_withdraw(amount, beneficiary.to_address())
            .returns(ReturnsResult)
            .run()
            .to_address()
    }

    /// Sends the withdrawal outcome callback from `poll`, reporting itself.
    pub fn finish_withdraw_poll(
        &mut self,
        poll: TestSCAddress,
        beneficiary: TestAddress,
        amount: u64,
    ) {
        let poll_address = poll.to_address();
        self.world
            .tx()
            .from(poll)
            .to(POOL)
            .typed(AssetPoolProxy)
            .on_withdrawal(poll_address, beneficiary.to_address(), amount)
            .run();
    }

    pub fn is_withdrawal_pending(&mut self, poll: TestSCAddress) -> bool {
        self.world
            .query()
            .to(POOL)
            .typed(AssetPoolProxy)
            .is_withdrawal_pending(poll.to_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_poll_count(&mut self) -> usize {
        self.world
            .query()
            .to(POOL)
            .typed(AssetPoolProxy)
            .get_withdraw_poll_count()
            .returns(ReturnsResult)
            .run()
    }

    // ── Factory mock inspection ──

    pub fn check_last_deadline(&mut self, expected: u64) {
        self.world
            .query()
            .to(FACTORY)
            .typed(PollFactoryMockProxy)
            .last_deadline()
            .returns(ExpectValue(expected))
            .run();
    }
}
