#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod asset_pool_proxy;
pub mod errors;
pub mod poll_factory_proxy;
pub mod poll_proxy;
pub mod types;

use errors::{
    ERR_BENEFICIARY_NOT_MEMBER, ERR_DEADLINE_OVERFLOW, ERR_INSUFFICIENT_BALANCE,
    ERR_INVALID_PAYMENT_TOKEN, ERR_INVALID_TOKEN, ERR_IS_EQUAL, ERR_IS_NOT_FINALIZED,
    ERR_POLL_REUSED, ERR_REWARD_NOT_ENABLED, ERR_REWARD_NOT_FOUND, ERR_UNAUTHORIZED_CALLBACK,
    ERR_WITHDRAWAL_MISMATCH, ERR_WITHDRAWAL_NOT_FOUND, ERR_WITHDRAWAL_SETTLED, ERR_ZERO_AMOUNT,
};
use types::{Reward, RewardState, Withdrawal, WithdrawalKind};

// ============================================================
// Constants
// ============================================================

/// Voting window applied to both poll families until the owner changes it:
/// 24 hours in seconds
pub const DEFAULT_POLL_DURATION: u64 = 86_400;

// ============================================================
// Contract
// ============================================================

/// Member-funded treasury. Funds leave only through `onWithdrawal`, invoked
/// by the withdrawal poll the pool itself requested from the poll factory.
#[multiversx_sc::contract]
pub trait AssetPool: access_control::AccessControlModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, owner: ManagedAddress, token: TokenIdentifier, poll_factory: ManagedAddress) {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        self.owner().set(&owner);
        self.token().set(&token);
        self.poll_factory().set(&poll_factory);
        self.reward_poll_duration().set(DEFAULT_POLL_DURATION);
        self.propose_withdraw_poll_duration()
            .set(DEFAULT_POLL_DURATION);
        self.reward_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Members pay the pool token into the treasury.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let caller = self.require_member();
        let payment = self.call_value().single_esdt();

        require!(
            payment.token_identifier == self.token().get(),
            ERR_INVALID_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        self.deposited_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINTS: configuration (owner only)
    // New durations apply to polls created afterwards.
    // ========================================================

    #[endpoint(setRewardPollDuration)]
    fn set_reward_poll_duration(&self, seconds: u64) {
        self.require_owner();
        self.reward_poll_duration().set(seconds);
        self.reward_poll_duration_changed_event(seconds);
    }

    #[endpoint(setProposeWithdrawPollDuration)]
    fn set_propose_withdraw_poll_duration(&self, seconds: u64) {
        self.require_owner();
        self.propose_withdraw_poll_duration().set(seconds);
        self.propose_withdraw_poll_duration_changed_event(seconds);
    }

    #[endpoint(setPollFactory)]
    fn set_poll_factory(&self, poll_factory: ManagedAddress) {
        self.require_owner();
        self.poll_factory().set(&poll_factory);
        self.poll_factory_changed_event(&poll_factory);
    }

    // ========================================================
    // ENDPOINT: addReward
    // New reward starts Disabled; its first poll decides the terms.
    // ========================================================

    #[endpoint(addReward)]
    fn add_reward(&self, withdraw_amount: BigUint, withdraw_duration: u64) -> ManagedAddress {
        let caller = self.require_owner();
        let id = self.reward_count().get();
        let now = self.blockchain().get_block_timestamp();

        let poll =
            self.create_reward_poll(&caller, id, &withdraw_amount, withdraw_duration);

        let reward = Reward {
            id,
            withdraw_amount: BigUint::zero(),
            withdraw_duration: 0u64,
            state: RewardState::Disabled,
            poll: poll.clone(),
            updated: now,
        };
        self.rewards(id).set(&reward);
        self.reward_count().set(id + 1);

        poll
    }

    // ========================================================
    // ENDPOINT: updateReward
    // One outstanding poll per reward: a new proposal waits until the
    // current poll is finalized.
    // ========================================================

    #[endpoint(updateReward)]
    fn update_reward(
        &self,
        id: u64,
        withdraw_amount: BigUint,
        withdraw_duration: u64,
    ) -> ManagedAddress {
        let caller = self.require_member();
        self.require_reward_exists(id);

        let mut reward = self.rewards(id).get();
        require!(self.is_poll_finalized(&reward.poll), ERR_IS_NOT_FINALIZED);
        require!(withdraw_amount != reward.withdraw_amount, ERR_IS_EQUAL);

        let poll =
            self.create_reward_poll(&caller, id, &withdraw_amount, withdraw_duration);

        // The replaced poll is finalized, so it has nothing left to report.
        reward.poll = poll.clone();
        reward.updated = self.blockchain().get_block_timestamp();
        self.rewards(id).set(&reward);

        poll
    }

    // ========================================================
    // CALLBACK: onRewardPollFinish
    // Only the reward's poll of record may report. The poll's verdict is
    // taken as-is.
    // ========================================================

    #[endpoint(onRewardPollFinish)]
    fn on_reward_poll_finish(
        &self,
        id: u64,
        withdraw_amount: BigUint,
        withdraw_duration: u64,
        agree: bool,
    ) {
        self.require_reward_exists(id);

        let caller = self.blockchain().get_caller();
        let mut reward = self.rewards(id).get();
        require!(caller == reward.poll, ERR_UNAUTHORIZED_CALLBACK);

        if agree {
            reward.state = RewardState::for_amount(&withdraw_amount);
            reward.withdraw_amount = withdraw_amount.clone();
            reward.withdraw_duration = withdraw_duration;
            reward.updated = self.blockchain().get_block_timestamp();
            self.rewards(id).set(&reward);
        }

        self.reward_poll_finished_event(id, &caller, agree, &withdraw_amount);
    }

    // ========================================================
    // ENDPOINT: claimWithdraw
    // A member asks to be paid an enabled reward.
    // ========================================================

    #[endpoint(claimWithdraw)]
    fn claim_withdraw(&self, id: u64) -> ManagedAddress {
        let caller = self.require_member();
        self.require_reward_exists(id);

        let reward = self.rewards(id).get();
        require!(reward.state == RewardState::Enabled, ERR_REWARD_NOT_ENABLED);

        let deadline = self.deadline_after(reward.withdraw_duration);
        self.create_withdraw_poll(
            &caller,
            &reward.withdraw_amount,
            deadline,
            WithdrawalKind::Claim { reward_id: id },
        )
    }

    // ========================================================
    // ENDPOINT: proposeWithdraw
    // Anyone may open a one-off withdrawal vote, but only for a member.
    // ========================================================

    #[endpoint(proposeWithdraw)]
    fn propose_withdraw(&self, amount: BigUint, beneficiary: ManagedAddress) -> ManagedAddress {
        require!(
            self.members().contains(&beneficiary),
            ERR_BENEFICIARY_NOT_MEMBER
        );
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let deadline = self.deadline_after(self.propose_withdraw_poll_duration().get());
        self.create_withdraw_poll(&beneficiary, &amount, deadline, WithdrawalKind::Proposal)
    }

    // ========================================================
    // CALLBACK: onWithdrawal
    // The only path that moves funds out of the treasury. Invoked by a
    // withdrawal poll on itself once it reaches agreement.
    // ========================================================

    #[endpoint(onWithdrawal)]
    fn on_withdrawal(&self, poll: ManagedAddress, beneficiary: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == poll, ERR_UNAUTHORIZED_CALLBACK);
        require!(!self.withdrawals(&poll).is_empty(), ERR_UNAUTHORIZED_CALLBACK);

        let withdrawal = self.withdrawals(&poll).get();
        require!(
            withdrawal.beneficiary == beneficiary && withdrawal.amount == amount,
            ERR_WITHDRAWAL_MISMATCH
        );

        let was_pending = self.pending_withdrawals().swap_remove(&poll);
        require!(was_pending, ERR_WITHDRAWAL_SETTLED);

        let token = self.token().get();
        require!(
            self.treasury_balance(&token) >= amount,
            ERR_INSUFFICIENT_BALANCE
        );

        self.send().direct_esdt(&beneficiary, &token, 0, &amount);
        self.withdrawn_event(&beneficiary, &amount);
    }

    // ========================================================
    // INTERNAL: poll orchestration
    // ========================================================

    fn create_reward_poll(
        &self,
        caller: &ManagedAddress,
        id: u64,
        withdraw_amount: &BigUint,
        withdraw_duration: u64,
    ) -> ManagedAddress {
        let deadline = self.deadline_after(self.reward_poll_duration().get());
        let factory = self.poll_factory().get();

        let poll: ManagedAddress = self
            .tx()
            .to(&factory)
            .typed(poll_factory_proxy::PollFactoryProxy)
            .create_reward_poll(
                id,
                withdraw_amount,
                withdraw_duration,
                deadline,
                self.blockchain().get_sc_address(),
                self.owner().get(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.register_poll(&poll);
        self.reward_poll_created_event(caller, &poll, id, withdraw_amount);

        poll
    }

    /// Shared by claims and proposals: requests the poll, then appends it to
    /// the withdraws sequence and marks it pending.
    fn create_withdraw_poll(
        &self,
        beneficiary: &ManagedAddress,
        amount: &BigUint,
        deadline: u64,
        kind: WithdrawalKind,
    ) -> ManagedAddress {
        let factory = self.poll_factory().get();

        let poll: ManagedAddress = self
            .tx()
            .to(&factory)
            .typed(poll_factory_proxy::PollFactoryProxy)
            .create_withdraw_poll(
                beneficiary,
                amount,
                deadline,
                self.blockchain().get_sc_address(),
                self.owner().get(),
                self.token().get(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.register_poll(&poll);

        let withdrawal = Withdrawal {
            id: self.withdraws().len() as u64,
            poll: poll.clone(),
            beneficiary: beneficiary.clone(),
            amount: amount.clone(),
            deadline,
            kind,
            created_at: self.blockchain().get_block_timestamp(),
        };
        self.withdraws().push(&poll);
        self.withdrawals(&poll).set(&withdrawal);
        self.pending_withdrawals().insert(poll.clone());

        self.withdraw_poll_created_event(beneficiary, &poll);

        poll
    }

    fn register_poll(&self, poll: &ManagedAddress) {
        let is_new = self.known_polls().insert(poll.clone());
        require!(is_new, ERR_POLL_REUSED);
    }

    fn is_poll_finalized(&self, poll: &ManagedAddress) -> bool {
        self.tx()
            .to(poll)
            .typed(poll_proxy::PollProxy)
            .finalized()
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Poll deadline `duration` seconds from now.
    fn deadline_after(&self, duration: u64) -> u64 {
        match self.blockchain().get_block_timestamp().checked_add(duration) {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_DEADLINE_OVERFLOW),
        }
    }

    fn require_reward_exists(&self, id: u64) {
        require!(id < self.reward_count().get(), ERR_REWARD_NOT_FOUND);
    }

    fn treasury_balance(&self, token: &TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getReward)]
    fn get_reward(&self, id: u64) -> Reward<Self::Api> {
        self.require_reward_exists(id);
        self.rewards(id).get()
    }

    #[view(getRewards)]
    fn get_rewards(&self, from: u64, count: u64) -> MultiValueEncoded<Reward<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.reward_count().get());
        for id in from..end {
            result.push(self.rewards(id).get());
        }
        result
    }

    #[view(getWithdrawPolls)]
    fn get_withdraw_polls(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for poll in self.withdraws().iter() {
            result.push(poll);
        }
        result
    }

    #[view(getWithdrawPollCount)]
    fn get_withdraw_poll_count(&self) -> usize {
        self.withdraws().len()
    }

    #[view(getWithdrawal)]
    fn get_withdrawal(&self, poll: &ManagedAddress) -> Withdrawal<Self::Api> {
        require!(!self.withdrawals(poll).is_empty(), ERR_WITHDRAWAL_NOT_FOUND);
        self.withdrawals(poll).get()
    }

    #[view(isWithdrawalPending)]
    fn is_withdrawal_pending(&self, poll: &ManagedAddress) -> bool {
        self.pending_withdrawals().contains(poll)
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance(&self.token().get())
    }

    #[view(getPoolConfig)]
    fn get_pool_config(&self) -> MultiValue4<TokenIdentifier, ManagedAddress, u64, u64> {
        (
            self.token().get(),
            self.poll_factory().get(),
            self.reward_poll_duration().get(),
            self.propose_withdraw_poll_duration().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposited")]
    fn deposited_event(&self, #[indexed] member: &ManagedAddress, amount: &BigUint);

    #[event("withdrawn")]
    fn withdrawn_event(&self, #[indexed] beneficiary: &ManagedAddress, amount: &BigUint);

    #[event("rewardPollCreated")]
    fn reward_poll_created_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] poll: &ManagedAddress,
        #[indexed] reward_id: u64,
        proposed_amount: &BigUint,
    );

    #[event("withdrawPollCreated")]
    fn withdraw_poll_created_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        poll: &ManagedAddress,
    );

    #[event("rewardPollFinished")]
    fn reward_poll_finished_event(
        &self,
        #[indexed] reward_id: u64,
        #[indexed] poll: &ManagedAddress,
        #[indexed] agree: bool,
        withdraw_amount: &BigUint,
    );

    #[event("rewardPollDurationChanged")]
    fn reward_poll_duration_changed_event(&self, #[indexed] seconds: u64);

    #[event("proposeWithdrawPollDurationChanged")]
    fn propose_withdraw_poll_duration_changed_event(&self, #[indexed] seconds: u64);

    #[event("pollFactoryChanged")]
    fn poll_factory_changed_event(&self, #[indexed] poll_factory: &ManagedAddress);

    // ========================================================
    // STORAGE
    // Keys are the persisted layout: never rename or repurpose one,
    // only add new keys.
    // ========================================================

    // ── Rewards ──

    #[storage_mapper("rewards")]
    fn rewards(&self, id: u64) -> SingleValueMapper<Reward<Self::Api>>;

    #[view(getRewardCount)]
    #[storage_mapper("rewardCount")]
    fn reward_count(&self) -> SingleValueMapper<u64>;

    // ── Withdrawals ──

    #[storage_mapper("withdraws")]
    fn withdraws(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("withdrawals")]
    fn withdrawals(&self, poll: &ManagedAddress) -> SingleValueMapper<Withdrawal<Self::Api>>;

    #[storage_mapper("pendingWithdrawals")]
    fn pending_withdrawals(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Configuration ──

    #[view(getProposeWithdrawPollDuration)]
    #[storage_mapper("proposeWithdrawPollDuration")]
    fn propose_withdraw_poll_duration(&self) -> SingleValueMapper<u64>;

    #[view(getRewardPollDuration)]
    #[storage_mapper("rewardPollDuration")]
    fn reward_poll_duration(&self) -> SingleValueMapper<u64>;

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPollFactory)]
    #[storage_mapper("pollFactory")]
    fn poll_factory(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Every poll address the factory has handed out ──

    #[storage_mapper("knownPolls")]
    fn known_polls(&self) -> UnorderedSetMapper<ManagedAddress>;
}
