#![no_std]

mod confirmations;
mod errors;
mod events;
mod execution;
mod ledger;
mod owner_change;
mod registry;
mod storage;
mod transfer;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::types::{OwnerRequest, Transaction, TransactionStatus};
pub use crate::wallet::{MultisigWallet, MultisigWalletClient};
