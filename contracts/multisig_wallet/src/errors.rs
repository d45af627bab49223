use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptyOwnerList = 3,
    DuplicateOwner = 4,
    InvalidThreshold = 5,
    ThresholdExceedsOwners = 6,
    NotOwner = 7,
    NoSuchTransaction = 8,
    NoSuchRequest = 9,
    AlreadyConfirmed = 10,
    AlreadyApproved = 11,
    NotConfirmed = 12,
    AlreadyExecuted = 13,
    InsufficientConfirmations = 14,
    InsufficientApprovals = 15,
    AlreadyOwner = 16,
    DuplicateProposal = 17,
    TransferFailed = 18,
    InvalidAmount = 19,
    AlreadyFinalized = 20,
}
