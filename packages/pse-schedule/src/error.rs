use cosmwasm_std::{CheckedMultiplyFractionError, DivideByZeroError, OverflowError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    CheckedMultiplyFractionError(#[from] CheckedMultiplyFractionError),

    #[error("InvalidAllocation: {msg}")]
    InvalidAllocation { msg: String },

    #[error("NoAllocations")]
    NoAllocations {},

    #[error("AllocationTooSmall: clearing account {clearing_account} cannot be divided across every period")]
    AllocationTooSmall { clearing_account: String },

    #[error("EmptyPeriod: period {period} has no allocations")]
    EmptyPeriod { period: u32 },

    #[error("The number of distribution periods must be greater than zero")]
    ZeroPeriods {},

    #[error("InvalidTimestamp: {timestamp}")]
    InvalidTimestamp { timestamp: u64 },

    #[error("InvalidSchedule: {msg}")]
    InvalidSchedule { msg: String },
}
