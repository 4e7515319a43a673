use cosmwasm_std::{Order, StdResult, Storage, Uint128};
use thiserror::Error;

use crate::{state::CLEARING_ACCOUNTS, ContractError};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum LedgerError {
    #[error("InsufficientFunds: clearing account {clearing_account} holds {balance}, {required} required")]
    InsufficientFunds {
        clearing_account: String,
        balance: Uint128,
        required: Uint128,
    },

    #[error("UnknownClearingAccount: {clearing_account}")]
    UnknownClearingAccount { clearing_account: String },
}

/// Registers a clearing account with its initial balance.
pub fn open(storage: &mut dyn Storage, clearing_account: &str, amount: Uint128) -> StdResult<()> {
    CLEARING_ACCOUNTS.save(storage, clearing_account, &amount)
}

pub fn balance(storage: &dyn Storage, clearing_account: &str) -> Result<Uint128, ContractError> {
    CLEARING_ACCOUNTS
        .may_load(storage, clearing_account)?
        .ok_or_else(|| {
            LedgerError::UnknownClearingAccount {
                clearing_account: clearing_account.to_string(),
            }
            .into()
        })
}

/// Fails unless the clearing account holds at least `required`.
pub fn ensure_available(
    storage: &dyn Storage,
    clearing_account: &str,
    required: Uint128,
) -> Result<(), ContractError> {
    let balance = balance(storage, clearing_account)?;

    if balance < required {
        return Err(LedgerError::InsufficientFunds {
            clearing_account: clearing_account.to_string(),
            balance,
            required,
        }
        .into());
    }

    Ok(())
}

pub fn mint(
    storage: &mut dyn Storage,
    clearing_account: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let new_balance = balance(storage, clearing_account)?.checked_add(amount)?;
    CLEARING_ACCOUNTS.save(storage, clearing_account, &new_balance)?;

    Ok(new_balance)
}

pub fn debit(
    storage: &mut dyn Storage,
    clearing_account: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    ensure_available(storage, clearing_account, amount)?;

    let new_balance = balance(storage, clearing_account)?.checked_sub(amount)?;
    CLEARING_ACCOUNTS.save(storage, clearing_account, &new_balance)?;

    Ok(new_balance)
}

pub fn clearing_accounts(storage: &dyn Storage) -> StdResult<Vec<String>> {
    CLEARING_ACCOUNTS
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

pub fn balances(storage: &dyn Storage) -> StdResult<Vec<(String, Uint128)>> {
    CLEARING_ACCOUNTS
        .range(storage, None, None, Order::Ascending)
        .collect()
}
