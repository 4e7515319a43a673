use cosmwasm_std::{Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;
use pse_interface::{
    distribution::{ClearingAccountBalance, CompletedDistribution, PendingDistributionInfo},
    msg::ConfigResponse,
};
use pse_schedule::{
    validate_and_build_schedule, AllocationPercentage, ScheduledDistribution,
    DEFAULT_DISTRIBUTION_PERIODS,
};

use crate::{
    ledger, queue,
    state::{self, CONFIG, DEFAULT_LIMIT},
};

pub fn config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;

    Ok(ConfigResponse {
        denom: config.denom,
        fallback_sink: config.fallback_sink,
        periods: config.periods,
        clearing_accounts: ledger::clearing_accounts(deps.storage)?,
    })
}

pub fn pending_distributions(
    deps: Deps,
    env: Env,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<PendingDistributionInfo>> {
    let now = env.block.time.seconds();

    queue::iterate(deps.storage, start_after, limit)?
        .into_iter()
        .map(|distribution| {
            let total_amount = distribution.total_amount()?;

            Ok(PendingDistributionInfo {
                timestamp: distribution.timestamp,
                remaining_seconds: distribution.timestamp.saturating_sub(now),
                allocations: distribution.allocations,
                total_amount,
            })
        })
        .collect()
}

pub fn clearing_account_balances(deps: Deps) -> StdResult<Vec<ClearingAccountBalance>> {
    Ok(ledger::balances(deps.storage)?
        .into_iter()
        .map(|(clearing_account, balance)| ClearingAccountBalance {
            clearing_account,
            balance,
        })
        .collect())
}

pub fn completed_distributions(
    deps: Deps,
    clearing_account: Option<String>,
    start_after: Option<(u64, String)>,
    limit: Option<u32>,
) -> StdResult<Vec<CompletedDistribution>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let completed = state::completed_distributions();

    match clearing_account {
        Some(clearing_account) => completed
            .idx
            .clearing_account
            .prefix(clearing_account)
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(_, record)| record))
            .collect(),
        None => completed
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(_, record)| record))
            .collect(),
    }
}

pub fn preview_schedule(
    allocations: Vec<AllocationPercentage>,
    total_amount: Uint128,
    start_time: u64,
    periods: Option<u32>,
) -> StdResult<Vec<ScheduledDistribution>> {
    validate_and_build_schedule(
        &allocations,
        total_amount,
        start_time,
        periods.unwrap_or(DEFAULT_DISTRIBUTION_PERIODS),
    )
    .map_err(|e| StdError::generic_err(e.to_string()))
}
