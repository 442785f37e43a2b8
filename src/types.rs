multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Request — a proposed disbursement from the pool
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Request<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    /// Amount sent to `recipient` on finalization. Never changes.
    pub value: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Set once by a successful finalization, never cleared.
    pub complete: bool,
    /// Always equals the size of the request's approval set.
    pub approval_count: u64,
}

impl<M: ManagedTypeApi> Request<M> {
    pub fn new(
        description: ManagedBuffer<M>,
        value: BigUint<M>,
        recipient: ManagedAddress<M>,
    ) -> Self {
        Request {
            description,
            value,
            recipient,
            complete: false,
            approval_count: 0,
        }
    }

    /// Strict majority of the approver count given.
    pub fn has_quorum(&self, approvers_count: u64) -> bool {
        self.approval_count.saturating_mul(2) > approvers_count
    }
}
