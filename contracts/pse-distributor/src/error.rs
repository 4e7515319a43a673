use cosmwasm_std::{OverflowError, StdError};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use pse_schedule::ScheduleError;
use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error("{0}")]
    ScheduleError(#[from] ScheduleError),

    #[error("LedgerFailure: {0}")]
    LedgerFailure(#[from] LedgerError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("InvalidMapping: {msg}")]
    InvalidMapping { msg: String },

    #[error("InvalidFunding: {msg}")]
    InvalidFunding { msg: String },

    #[error("ScheduleNotDrained")]
    ScheduleNotDrained {},
}
