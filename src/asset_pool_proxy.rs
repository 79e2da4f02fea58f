use multiversx_sc::proxy_imports::*;

use crate::types::{Reward, Withdrawal};

pub struct AssetPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AssetPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AssetPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AssetPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct AssetPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> AssetPoolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        token: Arg1,
        poll_factory: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&owner)
            .argument(&token)
            .argument(&poll_factory)
            .original_result()
    }
}

impl<Env, From, To, Gas> AssetPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> AssetPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Endpoints ──

    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn set_reward_poll_duration<Arg0: ProxyArg<u64>>(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRewardPollDuration")
            .argument(&seconds)
            .original_result()
    }

    pub fn set_propose_withdraw_poll_duration<Arg0: ProxyArg<u64>>(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setProposeWithdrawPollDuration")
            .argument(&seconds)
            .original_result()
    }

    pub fn set_poll_factory<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        poll_factory: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPollFactory")
            .argument(&poll_factory)
            .original_result()
    }

    pub fn add_reward<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        withdraw_amount: Arg0,
        withdraw_duration: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addReward")
            .argument(&withdraw_amount)
            .argument(&withdraw_duration)
            .original_result()
    }

    pub fn update_reward<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
        withdraw_amount: Arg1,
        withdraw_duration: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateReward")
            .argument(&id)
            .argument(&withdraw_amount)
            .argument(&withdraw_duration)
            .original_result()
    }

    pub fn on_reward_poll_finish<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<bool>,
    >(
        self,
        id: Arg0,
        withdraw_amount: Arg1,
        withdraw_duration: Arg2,
        agree: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("onRewardPollFinish")
            .argument(&id)
            .argument(&withdraw_amount)
            .argument(&withdraw_duration)
            .argument(&agree)
            .original_result()
    }

    pub fn claim_withdraw<Arg0: ProxyArg<u64>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimWithdraw")
            .argument(&id)
            .original_result()
    }

    pub fn propose_withdraw<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        beneficiary: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeWithdraw")
            .argument(&amount)
            .argument(&beneficiary)
            .original_result()
    }

    pub fn on_withdrawal<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        poll: Arg0,
        beneficiary: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("onWithdrawal")
            .argument(&poll)
            .argument(&beneficiary)
            .argument(&amount)
            .original_result()
    }

    pub fn add_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMember")
            .argument(&member)
            .original_result()
    }

    pub fn remove_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMember")
            .argument(&member)
            .original_result()
    }

    pub fn transfer_ownership<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    // ── Views ──

    pub fn get_reward<Arg0: ProxyArg<u64>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Reward<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReward")
            .argument(&id)
            .original_result()
    }

    pub fn get_rewards<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Reward<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewards")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn reward_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardCount")
            .original_result()
    }

    pub fn get_withdraw_polls(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWithdrawPolls")
            .original_result()
    }

    pub fn get_withdraw_poll_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWithdrawPollCount")
            .original_result()
    }

    pub fn get_withdrawal<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        poll: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Withdrawal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWithdrawal")
            .argument(&poll)
            .original_result()
    }

    pub fn is_withdrawal_pending<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        poll: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isWithdrawalPending")
            .argument(&poll)
            .original_result()
    }

    pub fn get_treasury_balance(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryBalance")
            .original_result()
    }

    pub fn get_pool_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<TokenIdentifier<Env::Api>, ManagedAddress<Env::Api>, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolConfig")
            .original_result()
    }

    pub fn reward_poll_duration(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardPollDuration")
            .original_result()
    }

    pub fn propose_withdraw_poll_duration(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposeWithdrawPollDuration")
            .original_result()
    }

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&address)
            .original_result()
    }
}
