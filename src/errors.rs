//! Rejection messages. Each starts with a stable reason code so off-chain
//! tooling can branch on the prefix.

pub const ERR_NOT_OWNER: &str = "Unauthorized: caller is not the owner";
pub const ERR_NOT_MEMBER: &str = "Unauthorized: caller is not a member";
pub const ERR_UNAUTHORIZED_CALLBACK: &str = "Unauthorized: caller is not the poll of record";
pub const ERR_BENEFICIARY_NOT_MEMBER: &str = "NotMember: beneficiary is not a member";

pub const ERR_REWARD_NOT_FOUND: &str = "RewardNotFound: reward does not exist";
pub const ERR_IS_NOT_FINALIZED: &str = "IsNotFinalized: current reward poll is still open";
pub const ERR_IS_EQUAL: &str = "IsEqual: proposed amount equals current amount";
pub const ERR_REWARD_NOT_ENABLED: &str = "RewardNotEnabled: reward is disabled";

pub const ERR_INSUFFICIENT_BALANCE: &str =
    "InsufficientBalance: treasury cannot cover the withdrawal";
pub const ERR_INVALID_TOKEN: &str = "InvalidToken: not a valid ESDT identifier";
pub const ERR_INVALID_PAYMENT_TOKEN: &str = "InvalidPaymentToken: payment is not the pool token";
pub const ERR_ZERO_AMOUNT: &str = "ZeroAmount: amount must be positive";

pub const ERR_POLL_REUSED: &str = "PollReused: factory returned a known poll address";
pub const ERR_WITHDRAWAL_MISMATCH: &str =
    "WithdrawalMismatch: reported terms differ from the poll of record";
pub const ERR_WITHDRAWAL_SETTLED: &str = "WithdrawalSettled: withdrawal already paid out";
pub const ERR_WITHDRAWAL_NOT_FOUND: &str = "WithdrawalNotFound: no withdrawal for this poll";

pub const ERR_DEADLINE_OVERFLOW: &str = "DeadlineOverflow: poll duration is too long";
