//! Periodic date schedules.
//!
//! Schedules are anchored on the final date and walked backwards in whole
//! periods, so any irregular stub sits at the front.

use crate::error::{ValoraError, ValoraResult};
use crate::types::Date;

/// Generates periodic dates between `start` and `end`, anchored on `end`.
///
/// Dates are built as `end.add_months(-k * period_months)` for `k = 0, 1, ...`
/// until a date on or before `start` is produced. That boundary date is kept
/// in the output, so the first element may precede `start`. The result is in
/// ascending order and always ends with `end`.
///
/// # Errors
///
/// Returns `ValoraError::InvalidInput` when `period_months` is zero, and
/// `ValoraError::InvalidDate` if the walk leaves the representable range.
///
/// # Example
///
/// ```rust
/// use valora_core::schedule::generate_periodic_dates;
/// use valora_core::types::Date;
///
/// let start = Date::from_ymd(2012, 1, 31).unwrap();
/// let end = Date::from_ymd(2013, 1, 31).unwrap();
/// let dates = generate_periodic_dates(start, end, 6).unwrap();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], start);
/// ```
pub fn generate_periodic_dates(
    start: Date,
    end: Date,
    period_months: u32,
) -> ValoraResult<Vec<Date>> {
    if period_months == 0 {
        return Err(ValoraError::invalid_input(
            "schedule period must be at least one month",
        ));
    }
    let step = i32::try_from(period_months).map_err(|_| {
        ValoraError::invalid_input(format!("schedule period {period_months} is too large"))
    })?;

    let mut dates = vec![end];
    let mut current = end;
    let mut k: i32 = 1;

    while current > start {
        let offset = k.checked_mul(step).ok_or_else(|| {
            ValoraError::invalid_input(format!("schedule from {start} to {end} is too long"))
        })?;
        current = end.add_months(-offset)?;
        dates.push(current);
        k += 1;
    }

    dates.reverse();
    log::debug!(
        "generated {} dates from {} to {} every {} months",
        dates.len(),
        start,
        end,
        period_months
    );
    Ok(dates)
}
