use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;
use pse_schedule::{ScheduleError, ScheduledDistribution};

use crate::{
    state::{DEFAULT_LIMIT, SCHEDULE},
    ContractError,
};

/// Pushes periods onto the back of the queue. Every timestamp must come after the current last one.
pub fn append(
    storage: &mut dyn Storage,
    schedule: &[ScheduledDistribution],
) -> Result<(), ContractError> {
    let mut last = SCHEDULE
        .keys(storage, None, None, Order::Descending)
        .next()
        .transpose()?;

    for distribution in schedule {
        if let Some(last) = last {
            if distribution.timestamp <= last {
                return Err(ScheduleError::InvalidSchedule {
                    msg: format!(
                        "timestamp {} does not come after queued period {}",
                        distribution.timestamp, last
                    ),
                }
                .into());
            }
        }

        SCHEDULE.save(storage, distribution.timestamp, &distribution.allocations)?;
        last = Some(distribution.timestamp);
    }

    Ok(())
}

pub fn peek_earliest(storage: &dyn Storage) -> StdResult<Option<ScheduledDistribution>> {
    SCHEDULE
        .range(storage, None, None, Order::Ascending)
        .next()
        .transpose()
        .map(|head| {
            head.map(|(timestamp, allocations)| ScheduledDistribution {
                timestamp,
                allocations,
            })
        })
}

pub fn remove_earliest(storage: &mut dyn Storage) -> StdResult<Option<ScheduledDistribution>> {
    let head = peek_earliest(storage)?;

    if let Some(distribution) = &head {
        SCHEDULE.remove(storage, distribution.timestamp);
    }

    Ok(head)
}

pub fn iterate(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<ScheduledDistribution>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    SCHEDULE
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (timestamp, allocations) = item?;

            Ok(ScheduledDistribution {
                timestamp,
                allocations,
            })
        })
        .collect()
}

pub fn is_empty(storage: &dyn Storage) -> bool {
    SCHEDULE.is_empty(storage)
}

/// Drops every pending period and queues `schedule` in its place.
pub fn replace(
    storage: &mut dyn Storage,
    schedule: &[ScheduledDistribution],
) -> Result<(), ContractError> {
    SCHEDULE.clear(storage);

    append(storage, schedule)
}
