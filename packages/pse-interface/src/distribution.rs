use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use pse_schedule::ClearingAccountAllocation;

/// Audit record of one clearing account's payout within a processed period.
#[cw_serde]
pub struct CompletedDistribution {
    pub clearing_account: String,
    /// Empty when the clearing account had no mapping
    pub recipients: Vec<Addr>,
    pub scheduled_time: u64,
    pub actual_time: u64,
    pub block_height: u64,
    pub amount: Uint128,
    pub per_recipient: Uint128,
    pub to_fallback_sink: Uint128,
    /// The whole amount went to the fallback sink
    pub diverted: bool,
}

#[cw_serde]
pub struct PendingDistributionInfo {
    pub timestamp: u64,
    /// Seconds until the period is due, zero once it is due
    pub remaining_seconds: u64,
    pub allocations: Vec<ClearingAccountAllocation>,
    pub total_amount: Uint128,
}

#[cw_serde]
pub struct ClearingAccountBalance {
    pub clearing_account: String,
    pub balance: Uint128,
}
