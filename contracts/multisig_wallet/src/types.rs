use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Asset,
    Threshold,
    Owners,
    Owner(Address),
    TransactionCount,
    Transaction(u64),
    Confirmation(u64, Address),
    OwnerRequest(Address),
    OwnerApproval(Address, Address),
}

/// A transfer request awaiting owner confirmations.
///
/// `confirmations` always equals the number of `DataKey::Confirmation`
/// entries recorded for `index`. Once `executed` is set the record is frozen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub index: u64,
    pub submitter: Address,
    pub destination: Address,
    pub amount: i128,
    pub payload: Bytes,
    pub executed: bool,
    pub confirmations: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionStatus {
    /// Fewer confirmations than the current threshold.
    Pending = 0,
    /// Threshold met, executable by any owner.
    Ready = 1,
    Executed = 2,
}

/// Pending proposal to add `candidate` to the owner set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerRequest {
    pub candidate: Address,
    pub proposer: Address,
    pub approvals: u32,
    pub finalized: bool,
}
