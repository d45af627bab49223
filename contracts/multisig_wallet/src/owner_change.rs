//! Propose / approve / finalize workflow for adding owners.
//!
//! Requests are keyed by candidate. Finalizing requires the same threshold
//! that gates transaction execution.

use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::registry;
use crate::storage;
use crate::types::{DataKey, OwnerRequest};

pub fn load(env: &Env, candidate: &Address) -> Result<OwnerRequest, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerRequest(candidate.clone()))
        .ok_or(WalletError::NoSuchRequest)
}

fn load_open(env: &Env, candidate: &Address) -> Result<OwnerRequest, WalletError> {
    let request = load(env, candidate)?;
    if request.finalized {
        return Err(WalletError::AlreadyFinalized);
    }
    Ok(request)
}

fn save(env: &Env, request: &OwnerRequest) {
    storage::write_record(env, &DataKey::OwnerRequest(request.candidate.clone()), request);
}

pub fn is_approved(env: &Env, candidate: &Address, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::OwnerApproval(candidate.clone(), owner.clone()))
}

pub fn propose(
    env: &Env,
    proposer: &Address,
    candidate: &Address,
) -> Result<OwnerRequest, WalletError> {
    if registry::is_owner(env, candidate) {
        return Err(WalletError::AlreadyOwner);
    }

    // An open request is never reset; its approvals stand.
    if let Ok(existing) = load(env, candidate) {
        if !existing.finalized {
            return Err(WalletError::DuplicateProposal);
        }
    }

    let request = OwnerRequest {
        candidate: candidate.clone(),
        proposer: proposer.clone(),
        approvals: 0,
        finalized: false,
    };
    save(env, &request);

    Ok(request)
}

pub fn approve(
    env: &Env,
    candidate: &Address,
    approver: &Address,
) -> Result<OwnerRequest, WalletError> {
    let mut request = load_open(env, candidate)?;

    if is_approved(env, candidate, approver) {
        return Err(WalletError::AlreadyApproved);
    }

    storage::write_record(
        env,
        &DataKey::OwnerApproval(candidate.clone(), approver.clone()),
        &true,
    );
    request.approvals += 1;
    save(env, &request);

    Ok(request)
}

/// Adds the candidate to the owner set and closes the request.
pub fn finalize(env: &Env, candidate: &Address) -> Result<OwnerRequest, WalletError> {
    let mut request = load_open(env, candidate)?;

    if request.approvals < registry::required_confirmations(env)? {
        return Err(WalletError::InsufficientApprovals);
    }

    registry::add_owner(env, candidate)?;

    request.finalized = true;
    save(env, &request);

    Ok(request)
}
