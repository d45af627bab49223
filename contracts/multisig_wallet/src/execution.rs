use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::ledger;
use crate::registry;
use crate::transfer;
use crate::types::Transaction;

/// Performs the transfer of a ready transaction and freezes it.
///
/// The threshold is checked against the live confirmation count. The
/// executed flag is only written after the transfer succeeded, so a declined
/// transfer leaves the transaction pending and retryable.
pub fn execute(env: &Env, index: u64) -> Result<Transaction, WalletError> {
    let mut transaction = ledger::load_pending(env, index)?;

    if transaction.confirmations < registry::required_confirmations(env)? {
        return Err(WalletError::InsufficientConfirmations);
    }

    // Execute the token transfer before marking the transaction
    transfer::send(env, &transaction.destination, transaction.amount)?;

    transaction.executed = true;
    ledger::save(env, &transaction);

    Ok(transaction)
}
