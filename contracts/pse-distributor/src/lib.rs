pub mod contract;
pub mod distribute;
mod error;
pub mod execute;
pub mod ledger;
pub mod mapping;
pub mod query;
pub mod queue;
pub mod state;

pub use crate::error::ContractError;
pub use crate::ledger::LedgerError;
