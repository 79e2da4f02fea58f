//! Stand-in for a poll contract. The test decides when it is finalized and
//! sends the outcome callbacks from its address.

#![no_std]

multiversx_sc::imports!();

pub mod poll_mock_proxy;

#[multiversx_sc::contract]
pub trait PollMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setFinalized)]
    fn set_finalized(&self, finalized: bool) {
        self.is_finalized().set(finalized);
    }

    #[view(finalized)]
    fn finalized(&self) -> bool {
        self.is_finalized().get()
    }

    #[storage_mapper("finalized")]
    fn is_finalized(&self) -> SingleValueMapper<bool>;
}
