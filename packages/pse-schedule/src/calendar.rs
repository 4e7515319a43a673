use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::ScheduleError;

/// Highest day of month a distribution may fall on. Every month has a 28th.
pub const MAX_DAY_OF_MONTH: u32 = 28;

/// Adds `months` calendar months to the UTC date of `start`, capping the day
/// of month at [`MAX_DAY_OF_MONTH`] and keeping the time of day.
///
/// The cap is applied even when `months` is zero, so a schedule starting on
/// the 31st pays out on the 28th from its first period.
pub fn add_months_capped(start: u64, months: u32) -> Result<u64, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimestamp { timestamp: start };

    let seconds = i64::try_from(start).map_err(|_| invalid())?;
    let start_dt = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(invalid)?
        .naive_utc();

    let month_index = i64::from(start_dt.year())
        .checked_mul(12)
        .and_then(|m| m.checked_add(i64::from(start_dt.month0())))
        .and_then(|m| m.checked_add(i64::from(months)))
        .ok_or_else(invalid)?;
    let year = i32::try_from(month_index.div_euclid(12)).map_err(|_| invalid())?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    let day = start_dt.day().min(MAX_DAY_OF_MONTH);

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let timestamp = NaiveDateTime::new(date, start_dt.time())
        .and_utc()
        .timestamp();

    u64::try_from(timestamp).map_err(|_| invalid())
}
