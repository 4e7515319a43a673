use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, OverflowError, Uint128};

/// The share of the total pool a clearing account is funded with.
#[cw_serde]
pub struct AllocationPercentage {
    pub clearing_account: String,
    pub percentage: Decimal,
}

#[cw_serde]
pub struct ClearingAccountAllocation {
    pub clearing_account: String,
    pub amount: Uint128,
}

/// One payout cycle across every scheduled clearing account.
#[cw_serde]
pub struct ScheduledDistribution {
    /// Unix seconds at which the period becomes due
    pub timestamp: u64,
    pub allocations: Vec<ClearingAccountAllocation>,
}

impl ScheduledDistribution {
    pub fn total_amount(&self) -> Result<Uint128, OverflowError> {
        self.allocations
            .iter()
            .try_fold(Uint128::zero(), |accumulator, x| {
                accumulator.checked_add(x.amount)
            })
    }
}
