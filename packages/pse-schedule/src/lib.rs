mod allocation;
mod calendar;
mod error;
mod models;
mod schedule;

pub use allocation::validate_allocations;
pub use calendar::{add_months_capped, MAX_DAY_OF_MONTH};
pub use error::ScheduleError;
pub use models::{AllocationPercentage, ClearingAccountAllocation, ScheduledDistribution};
pub use schedule::{
    generate_schedule, schedule_totals, validate_and_build_schedule, validate_schedule,
    DEFAULT_DISTRIBUTION_PERIODS,
};
