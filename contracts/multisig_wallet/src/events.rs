use soroban_sdk::{contractevent, Address, Bytes, Vec};

#[contractevent(topics = ["init"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletInitialized {
    pub owners: Vec<Address>,
    pub threshold: u32,
    pub asset: Address,
}

#[contractevent(topics = ["deposit"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent(topics = ["submit"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSubmitted {
    #[topic]
    pub submitter: Address,
    #[topic]
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
    pub payload: Bytes,
}

/// Data is the confirmation count after the change.
#[contractevent(topics = ["confirm"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionConfirmed {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u64,
    pub confirmations: u32,
}

#[contractevent(topics = ["revoke"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmationRevoked {
    #[topic]
    pub owner: Address,
    #[topic]
    pub index: u64,
    pub confirmations: u32,
}

/// Carries the payload alongside the transfer, since the token interface
/// has no data argument.
#[contractevent(topics = ["execute"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    #[topic]
    pub executor: Address,
    #[topic]
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
    pub payload: Bytes,
}

#[contractevent(topics = ["own_prop"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposed {
    #[topic]
    pub proposer: Address,
    pub candidate: Address,
}

#[contractevent(topics = ["own_appr"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerApproved {
    #[topic]
    pub approver: Address,
    #[topic]
    pub candidate: Address,
    pub approvals: u32,
}

#[contractevent(topics = ["own_add"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAdded {
    #[topic]
    pub finalizer: Address,
    #[topic]
    pub candidate: Address,
    pub owner_count: u32,
}
