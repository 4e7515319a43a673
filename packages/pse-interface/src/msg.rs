use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};
use pse_schedule::{AllocationPercentage, ScheduledDistribution};

#[allow(unused_imports)]
use crate::{
    distribution::{ClearingAccountBalance, CompletedDistribution, PendingDistributionInfo},
    mapping::{ClearingAccountMapping, FallbackSink},
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Governance address allowed to update mappings and the schedule
    pub authority: String,
    pub denom: String,
    pub allocations: Vec<AllocationPercentage>,
    /// Must match the funds attached to the instantiation
    pub total_amount: Uint128,
    /// Unix seconds of the first distribution, before day capping
    pub start_time: u64,
    /// Number of monthly periods, defaults to 84
    pub periods: Option<u32>,
    pub fallback_sink: FallbackSink<String>,
    pub mappings: Vec<ClearingAccountMapping<String>>,
}

#[cw_ownable_execute]
#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Replaces every clearing account mapping at once
    UpdateClearingAccountMappings {
        mappings: Vec<ClearingAccountMapping<String>>,
    },
    /// Processes the earliest period if it is due
    ProcessNext {},
    #[cw_orch(payable)]
    FundClearingAccount { clearing_account: String },
    /// Replaces the pending queue
    UpdateDistributionSchedule {
        schedule: Vec<ScheduledDistribution>,
    },
    /// Moves every remaining clearing account balance to the fallback sink once the schedule is drained
    SweepResiduals {},
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Vec<ScheduledDistribution>)]
    Schedule {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(Option<ScheduledDistribution>)]
    NextDistribution {},
    #[returns(Vec<PendingDistributionInfo>)]
    PendingDistributions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(Vec<ClearingAccountMapping<Addr>>)]
    ClearingAccountMappings {},
    #[returns(Option<ClearingAccountMapping<Addr>>)]
    ClearingAccountMapping { clearing_account: String },
    #[returns(Vec<ClearingAccountBalance>)]
    ClearingAccountBalances {},
    /// Ordered by `(scheduled_time, clearing_account)`; `start_after` takes the last pair seen
    #[returns(Vec<CompletedDistribution>)]
    CompletedDistributions {
        clearing_account: Option<String>,
        start_after: Option<(u64, String)>,
        limit: Option<u32>,
    },
    /// Validates the allocations and builds a schedule without storing it
    #[returns(Vec<ScheduledDistribution>)]
    PreviewSchedule {
        allocations: Vec<AllocationPercentage>,
        total_amount: Uint128,
        start_time: u64,
        periods: Option<u32>,
    },
}

#[cw_serde]
pub enum SudoMsg {
    /// Called by the host once per block
    BeginBlock {},
}

#[cw_serde]
pub enum MigrateMsg {
    FromCompatible {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub denom: String,
    pub fallback_sink: FallbackSink<Addr>,
    pub periods: u32,
    pub clearing_accounts: Vec<String>,
}
