//! Parametrised net present value functions.
//!
//! An [`NpvFunction`] captures a cashflow schedule (and, for the margin
//! variant, a reference curve) and evaluates the NPV for a single trial
//! value. It does not search for a root; see [`crate::irr`].
//!
//! - [`FlatRateNpv`]: `Σ c_k / (1 + r)^(d_k / B)`
//! - [`MarginNpv`]: `Σ c_k / ((1 + ref_k)(1 + s))^(d_k / B)`
//!
//! For a schedule with a negative first flow and non-negative later flows
//! both are strictly decreasing in their variable, which is what makes a
//! bracketed root search well-posed. That shape is not checked.

mod flat;
mod margin;

pub use flat::FlatRateNpv;
pub use margin::MarginNpv;

use ndarray::ArrayView1;
use std::fmt;

use crate::cashflows::{CashflowSchedule, ReferenceCurve};
use crate::error::{AnalyticsError, AnalyticsResult};

/// A net present value as a function of one variable.
pub trait NpvFunction: Send + Sync + fmt::Debug {
    /// Net present value at `x`.
    fn npv(&self, x: f64) -> f64;

    /// Analytic derivative of [`NpvFunction::npv`] with respect to `x`.
    fn derivative(&self, x: f64) -> f64;

    /// Name of the free variable, for diagnostics.
    fn variable(&self) -> &'static str;
}

/// Validates the day count base shared by both NPV variants.
pub(crate) fn check_day_count_base(day_count_base: f64) -> AnalyticsResult<()> {
    if day_count_base.is_finite() && day_count_base > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_input(format!(
            "day count base must be positive and finite, got {day_count_base}"
        )))
    }
}

/// Logs the parametrised schedule as a table at debug level.
pub(crate) fn log_schedule(
    kind: &str,
    schedule: &CashflowSchedule,
    reference: Option<ArrayView1<'_, f64>>,
) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    log::debug!("parametrising {kind} NPV over {} flows", schedule.len());
    let rows = schedule.amounts().into_iter().zip(schedule.day_offsets());
    match reference {
        Some(rates) => {
            log::debug!("{:>18} {:>10} {:>16}", "amount", "days", "reference");
            for ((amount, days), rate) in rows.zip(rates) {
                log::debug!("{amount:>18.2} {days:>10} {rate:>16.8}");
            }
        }
        None => {
            log::debug!("{:>18} {:>10}", "amount", "days");
            for (amount, days) in rows {
                log::debug!("{amount:>18.2} {days:>10}");
            }
        }
    }
}

/// Builds an NPV function from raw vectors.
///
/// Without `reference_rates` the result is a [`FlatRateNpv`] over the
/// discount rate; with them it is a [`MarginNpv`] over the spread, the rates
/// being annual effective and either one per flow or a single broadcast
/// value.
///
/// All validation happens here, before any evaluation.
///
/// # Errors
///
/// Returns `InvalidInput` for mismatched lengths, an empty schedule, a bad
/// reference rate count, or a non-positive day count base.
///
/// # Example
///
/// ```rust
/// use valora_analytics::npv::build_npv_function;
///
/// let npv = build_npv_function(&[-100.0, 110.0], &[0, 365], 365.0, None).unwrap();
/// assert!(npv.npv(0.10).abs() < 1e-12);
/// ```
pub fn build_npv_function(
    amounts: &[f64],
    day_offsets: &[i64],
    day_count_base: f64,
    reference_rates: Option<&[f64]>,
) -> AnalyticsResult<Box<dyn NpvFunction>> {
    let schedule = CashflowSchedule::new(amounts.to_vec(), day_offsets.to_vec())?;

    match reference_rates {
        None => Ok(Box::new(FlatRateNpv::new(schedule, day_count_base)?)),
        Some(rates) => {
            let curve = ReferenceCurve::new(rates.to_vec())?;
            Ok(Box::new(MarginNpv::new(schedule, &curve, day_count_base)?))
        }
    }
}
