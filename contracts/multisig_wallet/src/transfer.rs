//! Value movement over the wallet's configured asset.
//!
//! The asset is any contract implementing the standard token interface. Calls
//! go through `try_transfer` so a declined transfer surfaces as
//! `WalletError::TransferFailed` instead of trapping the wallet.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::WalletError;
use crate::types::DataKey;

pub fn asset(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Asset)
        .ok_or(WalletError::NotInitialized)
}

/// Moves `amount` from the wallet to `to`.
///
/// The token interface takes no data argument; a transaction's payload
/// travels in the `execute` event instead.
pub fn send(env: &Env, to: &Address, amount: i128) -> Result<(), WalletError> {
    let token_client = token::Client::new(env, &asset(env)?);
    let wallet = env.current_contract_address();

    match token_client.try_transfer(&wallet, to, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "outgoing transfer declined", to.clone(), amount);
            Err(WalletError::TransferFailed)
        }
    }
}

/// Pulls `amount` from `from` into the wallet. `from` must have authorized
/// the call.
pub fn receive(env: &Env, from: &Address, amount: i128) -> Result<(), WalletError> {
    let token_client = token::Client::new(env, &asset(env)?);
    let wallet = env.current_contract_address();

    match token_client.try_transfer(from, &wallet, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "deposit declined", from.clone(), amount);
            Err(WalletError::TransferFailed)
        }
    }
}

pub fn balance(env: &Env) -> Result<i128, WalletError> {
    let token_client = token::Client::new(env, &asset(env)?);
    Ok(token_client.balance(&env.current_contract_address()))
}
