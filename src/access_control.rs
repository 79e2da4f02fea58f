multiversx_sc::imports!();

use crate::errors::{ERR_NOT_MEMBER, ERR_NOT_OWNER};

/// Owner and membership checks for the pool. The owner is whoever was named
/// at `init`, not the deployer, and can hand the role over.
#[multiversx_sc::module]
pub trait AccessControlModule {
    // ========================================================
    // ENDPOINTS (owner only)
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        self.require_owner();
        if self.members().insert(member.clone()) {
            self.member_added_event(&member);
        }
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        self.require_owner();
        if self.members().swap_remove(&member) {
            self.member_removed_event(&member);
        }
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        let previous = self.owner().get();
        self.owner().set(&new_owner);
        self.ownership_transferred_event(&previous, &new_owner);
    }

    // ========================================================
    // GUARDS
    // ========================================================

    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
        caller
    }

    fn require_member(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.members().contains(&caller), ERR_NOT_MEMBER);
        caller
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] next: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
