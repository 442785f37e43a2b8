#![no_std]

multiversx_sc::imports!();

pub mod campaign_proxy;
pub mod errors;
pub mod types;

use errors::*;
use types::Request;

// ============================================================
// Contract
// ============================================================

/// A crowdfunding campaign. Contributors pool EGLD; the manager may only
/// spend it through requests that a strict majority of contributors approved.
#[multiversx_sc::contract]
pub trait Campaign {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `manager` defaults to the deployer. The factory passes the address
    /// that asked it to create the campaign.
    #[init]
    fn init(&self, minimum_contribution: BigUint, manager: OptionalValue<ManagedAddress>) {
        require!(minimum_contribution > 0u64, ERR_ZERO_MINIMUM);

        let manager = match manager {
            OptionalValue::Some(address) => address,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        require!(!manager.is_zero(), ERR_ZERO_MANAGER);

        self.manager().set(&manager);
        self.minimum_contribution().set(&minimum_contribution);
        self.approvers_count().set(0u64);
        self.total_contributed().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Strictly above the minimum. First contribution makes the
    // caller an approver; later ones only grow the pool.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            payment_amount > self.minimum_contribution().get(),
            ERR_BELOW_MINIMUM
        );

        if self.approvers().insert(caller.clone()) {
            self.approvers_count().update(|count| *count += 1);
            self.new_approver_event(&caller);
        }
        self.total_contributed()
            .update(|total| *total += &payment_amount);

        self.contribution_event(&caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: createRequest
    // Manager only. Returns the new request's index (0-based).
    // ========================================================

    #[endpoint(createRequest)]
    fn create_request(
        &self,
        description: ManagedBuffer,
        value: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        self.require_manager();
        require!(value > 0u64, ERR_ZERO_VALUE);

        let request_index = self.requests().len() as u64;
        let request = Request::new(description, value, recipient);
        self.requests().push(&request);

        self.request_created_event(request_index, &request.recipient, &request.value);

        request_index
    }

    // ========================================================
    // ENDPOINT: approveRequest
    // One vote per approver per request. Completed requests
    // no longer accept votes.
    // ========================================================

    #[endpoint(approveRequest)]
    fn approve_request(&self, request_index: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.approvers().contains(&caller), ERR_NOT_APPROVER);

        let mut request = self.require_request(request_index);
        require!(!request.complete, ERR_ALREADY_COMPLETE);
        require!(
            !self.request_approvals(request_index).contains(&caller),
            ERR_ALREADY_APPROVED
        );

        self.request_approvals(request_index).insert(caller.clone());
        request.approval_count += 1;
        self.save_request(request_index, &request);

        self.request_approved_event(request_index, &caller, request.approval_count);
    }

    // ========================================================
    // ENDPOINT: finalizeRequest
    // Manager only. Majority is checked against the approver
    // count at this moment, not when the request was created.
    // ========================================================

    #[endpoint(finalizeRequest)]
    fn finalize_request(&self, request_index: u64) {
        self.require_manager();

        let mut request = self.require_request(request_index);
        require!(!request.complete, ERR_ALREADY_COMPLETE);
        require!(
            request.has_quorum(self.approvers_count().get()),
            ERR_NO_QUORUM
        );

        let balance = self.pool_balance();
        require!(balance >= request.value, ERR_INSUFFICIENT_BALANCE);

        request.complete = true;
        self.save_request(request_index, &request);

        self.send().direct_egld(&request.recipient, &request.value);
        self.request_finalized_event(request_index, &request.recipient, &request.value);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.manager().get(), ERR_NOT_MANAGER);
    }

    /// Requests are stored 1-based in the VecMapper; callers see 0-based indices.
    fn require_request(&self, request_index: u64) -> Request<Self::Api> {
        require!(
            request_index < self.requests().len() as u64,
            ERR_REQUEST_NOT_FOUND
        );
        self.requests().get(request_index as usize + 1)
    }

    fn save_request(&self, request_index: u64, request: &Request<Self::Api>) {
        self.requests().set(request_index as usize + 1, request);
    }

    fn pool_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        self.manager().get()
    }

    #[view(getMinimumContribution)]
    fn get_minimum_contribution(&self) -> BigUint {
        self.minimum_contribution().get()
    }

    #[view(getApproversCount)]
    fn get_approvers_count(&self) -> u64 {
        self.approvers_count().get()
    }

    #[view(isApprover)]
    fn is_approver(&self, address: &ManagedAddress) -> bool {
        self.approvers().contains(address)
    }

    #[view(getRequest)]
    fn get_request(&self, request_index: u64) -> Request<Self::Api> {
        self.require_request(request_index)
    }

    #[view(getRequestsCount)]
    fn get_requests_count(&self) -> u64 {
        self.requests().len() as u64
    }

    #[view(getRequests)]
    fn get_requests(&self, from: u64, count: u64) -> MultiValueEncoded<Request<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.requests().len() as u64;
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for request_index in from..end {
            result.push(self.requests().get(request_index as usize + 1));
        }
        result
    }

    #[view(getApprovers)]
    fn get_approvers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.approvers().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, approver) in self.approvers().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(approver);
            }
        }
        result
    }

    #[view(hasApproved)]
    fn has_approved(&self, request_index: u64, address: &ManagedAddress) -> bool {
        self.request_approvals(request_index).contains(address)
    }

    #[view(getTotalContributed)]
    fn get_total_contributed(&self) -> BigUint {
        self.total_contributed().get()
    }

    /// (minimum contribution, balance, requests count, approvers count, manager)
    #[view(getSummary)]
    fn get_summary(&self) -> MultiValue5<BigUint, BigUint, u64, u64, ManagedAddress> {
        (
            self.minimum_contribution().get(),
            self.pool_balance(),
            self.requests().len() as u64,
            self.approvers_count().get(),
            self.manager().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribution")]
    fn contribution_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("newApprover")]
    fn new_approver_event(&self, #[indexed] approver: &ManagedAddress);

    #[event("requestCreated")]
    fn request_created_event(
        &self,
        #[indexed] request_index: u64,
        #[indexed] recipient: &ManagedAddress,
        value: &BigUint,
    );

    #[event("requestApproved")]
    fn request_approved_event(
        &self,
        #[indexed] request_index: u64,
        #[indexed] approver: &ManagedAddress,
        approval_count: u64,
    );

    #[event("requestFinalized")]
    fn request_finalized_event(
        &self,
        #[indexed] request_index: u64,
        #[indexed] recipient: &ManagedAddress,
        value: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("minimumContribution")]
    fn minimum_contribution(&self) -> SingleValueMapper<BigUint>;

    // ── Contributors ──

    #[storage_mapper("approvers")]
    fn approvers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Kept equal to `approvers().len()`.
    #[storage_mapper("approversCount")]
    fn approvers_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalContributed")]
    fn total_contributed(&self) -> SingleValueMapper<BigUint>;

    // ── Requests ──

    #[storage_mapper("requests")]
    fn requests(&self) -> VecMapper<Request<Self::Api>>;

    #[storage_mapper("requestApprovals")]
    fn request_approvals(&self, request_index: u64) -> UnorderedSetMapper<ManagedAddress>;
}
