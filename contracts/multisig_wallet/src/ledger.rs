//! Append-only record of submitted transfer requests.

use soroban_sdk::{Address, Bytes, Env};

use crate::errors::WalletError;
use crate::registry;
use crate::storage;
use crate::types::{DataKey, Transaction, TransactionStatus};

pub fn submit(
    env: &Env,
    submitter: &Address,
    destination: Address,
    amount: i128,
    payload: Bytes,
) -> Result<Transaction, WalletError> {
    if amount < 0 {
        return Err(WalletError::InvalidAmount);
    }

    let index = count(env);
    let transaction = Transaction {
        index,
        submitter: submitter.clone(),
        destination,
        amount,
        payload,
        executed: false,
        confirmations: 0,
    };

    save(env, &transaction);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(index + 1));

    Ok(transaction)
}

/// Number of submitted transactions, executed ones included.
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub fn load(env: &Env, index: u64) -> Result<Transaction, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(index))
        .ok_or(WalletError::NoSuchTransaction)
}

/// Loads a transaction that can still be confirmed, revoked or executed.
pub fn load_pending(env: &Env, index: u64) -> Result<Transaction, WalletError> {
    let transaction = load(env, index)?;
    if transaction.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    Ok(transaction)
}

pub fn save(env: &Env, transaction: &Transaction) {
    storage::write_record(env, &DataKey::Transaction(transaction.index), transaction);
}

pub fn status(env: &Env, index: u64) -> Result<TransactionStatus, WalletError> {
    let transaction = load(env, index)?;
    if transaction.executed {
        return Ok(TransactionStatus::Executed);
    }

    if transaction.confirmations >= registry::required_confirmations(env)? {
        Ok(TransactionStatus::Ready)
    } else {
        Ok(TransactionStatus::Pending)
    }
}
