//! Contract entry points.
//!
//! Every mutating call takes the acting owner as `caller` and requires its
//! authorization. A call that returns an error is rolled back by the host in
//! full.

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

use crate::confirmations;
use crate::errors::WalletError;
use crate::events::{
    ConfirmationRevoked, Deposited, OwnerAdded, OwnerApproved, OwnerProposed, TransactionConfirmed,
    TransactionExecuted, TransactionSubmitted, WalletInitialized,
};
use crate::execution;
use crate::ledger;
use crate::owner_change;
use crate::registry;
use crate::storage;
use crate::transfer;
use crate::types::{DataKey, OwnerRequest, Transaction, TransactionStatus};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required_confirmations: u32,
        asset: Address,
    ) -> Result<(), WalletError> {
        // Initialization happens exactly once
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        registry::init(&env, &owners, required_confirmations)?;

        env.storage().instance().set(&DataKey::Asset, &asset);
        env.storage().instance().set(&DataKey::Initialized, &true);
        storage::extend_instance(&env);

        WalletInitialized {
            owners,
            threshold: required_confirmations,
            asset,
        }
        .publish(&env);
        Ok(())
    }

    /// Funds the wallet from `from`. Anyone may deposit.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        // Deposits must move value
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        transfer::receive(&env, &from, amount)?;
        storage::extend_instance(&env);

        Deposited {
            balance: transfer::balance(&env)?,
            from,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    pub fn submit_transaction(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<u64, WalletError> {
        Self::authorize(&env, &caller)?;

        let transaction = ledger::submit(&env, &caller, destination, amount, payload)?;

        TransactionSubmitted {
            submitter: transaction.submitter,
            index: transaction.index,
            destination: transaction.destination,
            amount: transaction.amount,
            payload: transaction.payload,
        }
        .publish(&env);
        Ok(transaction.index)
    }

    pub fn confirm_transaction(env: Env, caller: Address, index: u64) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        let transaction = confirmations::confirm(&env, index, &caller)?;

        TransactionConfirmed {
            owner: caller,
            index,
            confirmations: transaction.confirmations,
        }
        .publish(&env);
        Ok(())
    }

    pub fn revoke_confirmation(env: Env, caller: Address, index: u64) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        let transaction = confirmations::revoke(&env, index, &caller)?;

        ConfirmationRevoked {
            owner: caller,
            index,
            confirmations: transaction.confirmations,
        }
        .publish(&env);
        Ok(())
    }

    /// Any owner may execute once the threshold is met, confirmer or not.
    pub fn execute_transaction(env: Env, caller: Address, index: u64) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        let transaction = execution::execute(&env, index)?;

        TransactionExecuted {
            executor: caller,
            index,
            destination: transaction.destination,
            amount: transaction.amount,
            payload: transaction.payload,
        }
        .publish(&env);
        Ok(())
    }

    /// Opens an owner change request for `candidate`.
    pub fn add_owner(env: Env, caller: Address, candidate: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        let request = owner_change::propose(&env, &caller, &candidate)?;

        OwnerProposed {
            proposer: caller,
            candidate: request.candidate,
        }
        .publish(&env);
        Ok(())
    }

    pub fn approve_owner(env: Env, caller: Address, candidate: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        let request = owner_change::approve(&env, &candidate, &caller)?;

        OwnerApproved {
            approver: caller,
            candidate,
            approvals: request.approvals,
        }
        .publish(&env);
        Ok(())
    }

    /// Finalizes the request for `candidate`, admitting it as an owner.
    pub fn set_owner(env: Env, caller: Address, candidate: Address) -> Result<(), WalletError> {
        Self::authorize(&env, &caller)?;

        owner_change::finalize(&env, &candidate)?;

        OwnerAdded {
            finalizer: caller,
            candidate,
            owner_count: registry::owner_count(&env),
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_transaction_count(env: Env) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        Ok(ledger::count(&env))
    }

    pub fn get_transaction(env: Env, index: u64) -> Result<Transaction, WalletError> {
        Self::require_initialized(&env)?;
        ledger::load(&env, index)
    }

    pub fn transaction_status(env: Env, index: u64) -> Result<TransactionStatus, WalletError> {
        Self::require_initialized(&env)?;
        ledger::status(&env, index)
    }

    pub fn confirmation_count(env: Env, index: u64) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        confirmations::confirmation_count(&env, index)
    }

    pub fn get_confirmations(env: Env, index: u64) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        confirmations::confirmers(&env, index)
    }

    pub fn is_confirmed(env: Env, index: u64, owner: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        ledger::load(&env, index)?;
        Ok(confirmations::is_confirmed(&env, index, &owner))
    }

    pub fn get_owner_request(env: Env, candidate: Address) -> Result<OwnerRequest, WalletError> {
        Self::require_initialized(&env)?;
        owner_change::load(&env, &candidate)
    }

    pub fn is_approved(env: Env, candidate: Address, owner: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        owner_change::load(&env, &candidate)?;
        Ok(owner_change::is_approved(&env, &candidate, &owner))
    }

    pub fn is_owner(env: Env, id: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::is_owner(&env, &id))
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::owners(&env))
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::owner_count(&env))
    }

    pub fn required_confirmations(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        registry::required_confirmations(&env)
    }

    pub fn asset(env: Env) -> Result<Address, WalletError> {
        Self::require_initialized(&env)?;
        transfer::asset(&env)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        Self::require_initialized(&env)?;
        transfer::balance(&env)
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn authorize(env: &Env, caller: &Address) -> Result<(), WalletError> {
        Self::require_initialized(env)?;
        caller.require_auth();

        // Verify caller is an owner
        registry::require_owner(env, caller)?;
        storage::extend_instance(env);
        Ok(())
    }
}
