use std::collections::BTreeMap;

use cosmwasm_std::Uint128;
use itertools::Itertools;

use crate::{
    add_months_capped, validate_allocations, AllocationPercentage, ClearingAccountAllocation,
    ScheduleError, ScheduledDistribution,
};

/// Number of monthly periods used when the instantiator does not pick one.
pub const DEFAULT_DISTRIBUTION_PERIODS: u32 = 84;

/// Builds `periods` monthly distributions out of `total_amount`.
///
/// Each clearing account receives `floor(percentage * total_amount) / periods`
/// per period. Both divisions truncate, so `total_balance % periods` of every
/// account is never scheduled.
pub fn generate_schedule(
    allocations: &[AllocationPercentage],
    total_amount: Uint128,
    start_time: u64,
    periods: u32,
) -> Result<Vec<ScheduledDistribution>, ScheduleError> {
    if allocations.is_empty() {
        return Err(ScheduleError::NoAllocations {});
    }
    if periods == 0 {
        return Err(ScheduleError::ZeroPeriods {});
    }

    let per_period = allocations
        .iter()
        .map(|allocation| {
            let total_balance = total_amount.checked_mul_floor(allocation.percentage)?;
            let amount = total_balance.checked_div(Uint128::from(periods))?;
            if amount.is_zero() {
                return Err(ScheduleError::AllocationTooSmall {
                    clearing_account: allocation.clearing_account.clone(),
                });
            }

            Ok(ClearingAccountAllocation {
                clearing_account: allocation.clearing_account.clone(),
                amount,
            })
        })
        .collect::<Result<Vec<_>, ScheduleError>>()?;

    (0..periods)
        .map(|period| {
            let timestamp = add_months_capped(start_time, period)?;
            if per_period.is_empty() {
                return Err(ScheduleError::EmptyPeriod { period });
            }

            Ok(ScheduledDistribution {
                timestamp,
                allocations: per_period.clone(),
            })
        })
        .collect()
}

/// Validates the allocations and generates the schedule from them.
pub fn validate_and_build_schedule(
    allocations: &[AllocationPercentage],
    total_amount: Uint128,
    start_time: u64,
    periods: u32,
) -> Result<Vec<ScheduledDistribution>, ScheduleError> {
    validate_allocations(allocations)?;

    generate_schedule(allocations, total_amount, start_time, periods)
}

/// Checks a hand-built schedule before it replaces the pending queue.
pub fn validate_schedule(
    schedule: &[ScheduledDistribution],
    known_accounts: &[String],
) -> Result<(), ScheduleError> {
    let invalid = |msg: String| ScheduleError::InvalidSchedule { msg };

    for (i, distribution) in schedule.iter().enumerate() {
        if distribution.timestamp == 0 {
            return Err(invalid(format!("period {}: timestamp cannot be zero", i)));
        }

        if distribution.allocations.is_empty() {
            return Err(invalid(format!("period {}: no allocations", i)));
        }

        for allocation in distribution.allocations.iter() {
            if allocation.clearing_account.is_empty() {
                return Err(invalid(format!("period {}: empty clearing account name", i)));
            }
            if !known_accounts.contains(&allocation.clearing_account) {
                return Err(invalid(format!(
                    "period {}: unknown clearing account {}",
                    i, allocation.clearing_account
                )));
            }
            if allocation.amount.is_zero() {
                return Err(invalid(format!(
                    "period {}: zero amount for {}",
                    i, allocation.clearing_account
                )));
            }
        }

        if let Some(duplicate) = distribution
            .allocations
            .iter()
            .map(|allocation| allocation.clearing_account.as_str())
            .duplicates()
            .next()
        {
            return Err(invalid(format!(
                "period {}: duplicate clearing account {}",
                i, duplicate
            )));
        }
    }

    if let Some((i, (prev, next))) = schedule
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (prev, next))| next.timestamp <= prev.timestamp)
    {
        return Err(invalid(format!(
            "period {}: timestamp {} does not come after {}",
            i + 1,
            next.timestamp,
            prev.timestamp
        )));
    }

    Ok(())
}

/// Sums the scheduled amount per clearing account.
pub fn schedule_totals(
    schedule: &[ScheduledDistribution],
) -> Result<BTreeMap<String, Uint128>, ScheduleError> {
    let mut totals: BTreeMap<String, Uint128> = BTreeMap::new();

    for allocation in schedule.iter().flat_map(|d| d.allocations.iter()) {
        let total = totals
            .entry(allocation.clearing_account.clone())
            .or_default();
        *total = total.checked_add(allocation.amount)?;
    }

    Ok(totals)
}
