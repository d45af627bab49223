use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::ledger;
use crate::registry;
use crate::storage;
use crate::types::{DataKey, Transaction};

pub fn is_confirmed(env: &Env, index: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmation(index, owner.clone()))
}

pub fn confirm(env: &Env, index: u64, owner: &Address) -> Result<Transaction, WalletError> {
    let mut transaction = ledger::load_pending(env, index)?;

    // Check if already confirmed
    if is_confirmed(env, index, owner) {
        return Err(WalletError::AlreadyConfirmed);
    }

    storage::write_record(env, &DataKey::Confirmation(index, owner.clone()), &true);
    transaction.confirmations += 1;
    ledger::save(env, &transaction);

    Ok(transaction)
}

/// Withdraws a confirmation. This may drop a ready transaction back below
/// the threshold.
pub fn revoke(env: &Env, index: u64, owner: &Address) -> Result<Transaction, WalletError> {
    let mut transaction = ledger::load_pending(env, index)?;

    if !is_confirmed(env, index, owner) {
        return Err(WalletError::NotConfirmed);
    }

    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(index, owner.clone()));
    transaction.confirmations -= 1;
    ledger::save(env, &transaction);

    Ok(transaction)
}

pub fn confirmation_count(env: &Env, index: u64) -> Result<u32, WalletError> {
    Ok(ledger::load(env, index)?.confirmations)
}

/// Owners currently confirming `index`, in registry order.
pub fn confirmers(env: &Env, index: u64) -> Result<Vec<Address>, WalletError> {
    ledger::load(env, index)?;

    let mut confirmers = Vec::new(env);
    for owner in registry::owners(env).iter() {
        if is_confirmed(env, index, &owner) {
            confirmers.push_back(owner);
        }
    }
    Ok(confirmers)
}
