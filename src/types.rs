multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Reward State — Enabled iff the last approved amount > 0
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum RewardState {
    /// No approved terms yet, or the last approved amount was zero.
    Disabled,
    /// Members may claim `withdraw_amount` through a withdrawal poll.
    Enabled,
}

impl RewardState {
    pub fn for_amount<M: ManagedTypeApi>(amount: &BigUint<M>) -> Self {
        if *amount > 0u64 {
            RewardState::Enabled
        } else {
            RewardState::Disabled
        }
    }
}

// ============================================================
// Reward — a recurring, poll-approved withdrawal right
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Reward<M: ManagedTypeApi> {
    /// Dense, 0-based position in the reward sequence.
    pub id: u64,
    pub withdraw_amount: BigUint<M>,
    /// Voting window, in seconds, of each withdrawal poll claimed against this reward.
    pub withdraw_duration: u64,
    pub state: RewardState,
    /// The reward-parameter poll deciding the next terms. Only this address
    /// may report an outcome for this reward.
    pub poll: ManagedAddress<M>,
    pub updated: u64,
}

// ============================================================
// Withdrawal — immutable record of one withdrawal poll
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum WithdrawalKind {
    /// A member claiming an enabled reward for themselves.
    Claim { reward_id: u64 },
    /// A one-off transfer to a member, not tied to a reward.
    Proposal,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Withdrawal<M: ManagedTypeApi> {
    /// Position of `poll` in the withdraws sequence.
    pub id: u64,
    pub poll: ManagedAddress<M>,
    pub beneficiary: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub deadline: u64,
    pub kind: WithdrawalKind,
    pub created_at: u64,
}
