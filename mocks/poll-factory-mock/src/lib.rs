//! Stand-in for the poll factory. Hands out pre-deployed poll addresses in
//! the order they were queued and remembers the last request of each kind.

#![no_std]

multiversx_sc::imports!();

pub mod poll_factory_mock_proxy;

#[multiversx_sc::contract]
pub trait PollFactoryMock {
    #[init]
    fn init(&self) {}

    #[endpoint(queuePoll)]
    fn queue_poll(&self, poll: ManagedAddress) {
        self.queued_polls().push(&poll);
    }

    #[endpoint(createRewardPoll)]
    fn create_reward_poll(
        &self,
        reward_id: u64,
        withdraw_amount: BigUint,
        withdraw_duration: u64,
        deadline: u64,
        pool: ManagedAddress,
        owner: ManagedAddress,
    ) -> ManagedAddress {
        self.last_reward_id().set(reward_id);
        self.last_amount().set(&withdraw_amount);
        self.last_duration().set(withdraw_duration);
        self.last_deadline().set(deadline);
        self.last_pool().set(&pool);
        self.last_owner().set(&owner);
        self.next_poll()
    }

    #[endpoint(createWithdrawPoll)]
    fn create_withdraw_poll(
        &self,
        beneficiary: ManagedAddress,
        amount: BigUint,
        deadline: u64,
        pool: ManagedAddress,
        owner: ManagedAddress,
        token: TokenIdentifier,
    ) -> ManagedAddress {
        self.last_beneficiary().set(&beneficiary);
        self.last_amount().set(&amount);
        self.last_deadline().set(deadline);
        self.last_pool().set(&pool);
        self.last_owner().set(&owner);
        self.last_token().set(&token);
        self.next_poll()
    }

    fn next_poll(&self) -> ManagedAddress {
        let index = self.issued_count().get() + 1;
        require!(index <= self.queued_polls().len(), "No poll queued");
        self.issued_count().set(index);
        self.queued_polls().get(index)
    }

    #[storage_mapper("queuedPolls")]
    fn queued_polls(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("issuedCount")]
    fn issued_count(&self) -> SingleValueMapper<usize>;

    #[view(lastRewardId)]
    #[storage_mapper("lastRewardId")]
    fn last_reward_id(&self) -> SingleValueMapper<u64>;

    #[view(lastAmount)]
    #[storage_mapper("lastAmount")]
    fn last_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(lastDuration)]
    #[storage_mapper("lastDuration")]
    fn last_duration(&self) -> SingleValueMapper<u64>;

    #[view(lastDeadline)]
    #[storage_mapper("lastDeadline")]
    fn last_deadline(&self) -> SingleValueMapper<u64>;

    #[view(lastBeneficiary)]
    #[storage_mapper("lastBeneficiary")]
    fn last_beneficiary(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(lastPool)]
    #[storage_mapper("lastPool")]
    fn last_pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(lastOwner)]
    #[storage_mapper("lastOwner")]
    fn last_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(lastToken)]
    #[storage_mapper("lastToken")]
    fn last_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
