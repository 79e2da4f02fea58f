use multiversx_sc::proxy_imports::*;

/// Calls into the poll factory contract that instantiates one poll contract
/// per reward-parameter proposal and per withdrawal attempt.
pub struct PollFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PollFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PollFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PollFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct PollFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PollFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_reward_poll<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        reward_id: Arg0,
        withdraw_amount: Arg1,
        withdraw_duration: Arg2,
        deadline: Arg3,
        pool: Arg4,
        owner: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createRewardPoll")
            .argument(&reward_id)
            .argument(&withdraw_amount)
            .argument(&withdraw_duration)
            .argument(&deadline)
            .argument(&pool)
            .argument(&owner)
            .original_result()
    }

    pub fn create_withdraw_poll<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        beneficiary: Arg0,
        amount: Arg1,
        deadline: Arg2,
        pool: Arg3,
        owner: Arg4,
        token: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createWithdrawPoll")
            .argument(&beneficiary)
            .argument(&amount)
            .argument(&deadline)
            .argument(&pool)
            .argument(&owner)
            .argument(&token)
            .original_result()
    }
}
