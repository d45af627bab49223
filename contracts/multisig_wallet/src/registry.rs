//! Owner set and the confirmation threshold shared by every workflow.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

pub fn init(env: &Env, owners: &Vec<Address>, threshold: u32) -> Result<(), WalletError> {
    // Validate the initial owner set and threshold
    if owners.is_empty() {
        return Err(WalletError::EmptyOwnerList);
    }

    if threshold == 0 {
        return Err(WalletError::InvalidThreshold);
    }

    if threshold > owners.len() {
        return Err(WalletError::ThresholdExceedsOwners);
    }

    // Check for duplicate owners
    let instance = env.storage().instance();
    for owner in owners.iter() {
        let key = DataKey::Owner(owner);
        if instance.has(&key) {
            return Err(WalletError::DuplicateOwner);
        }
        instance.set(&key, &true);
    }

    instance.set(&DataKey::Owners, owners);
    instance.set(&DataKey::Threshold, &threshold);
    Ok(())
}

pub fn is_owner(env: &Env, id: &Address) -> bool {
    env.storage().instance().has(&DataKey::Owner(id.clone()))
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
    if !is_owner(env, caller) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

pub fn required_confirmations(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .ok_or(WalletError::NotInitialized)
}

/// Owners in the order they joined.
pub fn owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub fn owner_count(env: &Env) -> u32 {
    owners(env).len()
}

/// Only reachable through a finalized owner change request.
pub fn add_owner(env: &Env, id: &Address) -> Result<(), WalletError> {
    if is_owner(env, id) {
        return Err(WalletError::DuplicateOwner);
    }

    let mut owners = owners(env);
    owners.push_back(id.clone());

    let instance = env.storage().instance();
    instance.set(&DataKey::Owners, &owners);
    instance.set(&DataKey::Owner(id.clone()), &true);
    Ok(())
}
