use std::collections::BTreeSet;

use cosmwasm_std::Decimal;

use crate::{AllocationPercentage, ScheduleError};

/// Checks that the allocations are well formed and sum to exactly one.
///
/// `Decimal` is unsigned, so a negative percentage is rejected by the type
/// itself when the message is deserialized.
pub fn validate_allocations(allocations: &[AllocationPercentage]) -> Result<(), ScheduleError> {
    if allocations.is_empty() {
        return Err(ScheduleError::InvalidAllocation {
            msg: "no allocations provided".to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut total_percentage = Decimal::zero();
    for (i, allocation) in allocations.iter().enumerate() {
        if allocation.clearing_account.is_empty() {
            return Err(ScheduleError::InvalidAllocation {
                msg: format!("allocation {}: empty clearing account name", i),
            });
        }

        if !seen.insert(allocation.clearing_account.as_str()) {
            return Err(ScheduleError::InvalidAllocation {
                msg: format!(
                    "allocation {} ({}): duplicate clearing account",
                    i, allocation.clearing_account
                ),
            });
        }

        if allocation.percentage > Decimal::one() {
            return Err(ScheduleError::InvalidAllocation {
                msg: format!(
                    "allocation {} ({}): percentage {} exceeds 1",
                    i, allocation.clearing_account, allocation.percentage
                ),
            });
        }

        total_percentage = total_percentage.checked_add(allocation.percentage)?;
    }

    if total_percentage != Decimal::one() {
        return Err(ScheduleError::InvalidAllocation {
            msg: format!("total percentage must equal 1, got {}", total_percentage),
        });
    }

    Ok(())
}
