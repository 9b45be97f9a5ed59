//! Solving NPV functions for their root.
//!
//! Wires an [`NpvFunction`] into the configured bracketed root finder.
//! Solver failures are returned as [`AnalyticsError::Solver`] exactly as the
//! root finder raised them.

use valora_core::types::Date;
use valora_math::solvers::SolverResult;

use crate::cashflows::{CashflowSchedule, ReferenceCurve};
use crate::config::ValuationConfig;
use crate::error::{AnalyticsError, AnalyticsResult, Validate};
use crate::npv::{FlatRateNpv, MarginNpv, NpvFunction};

/// Finds the root of `npv` inside `config.bracket`.
///
/// # Errors
///
/// Returns a validation error for an invalid `config`, and
/// [`AnalyticsError::Solver`] when the bracket holds no sign change or the
/// iteration budget runs out.
pub fn solve(npv: &dyn NpvFunction, config: &ValuationConfig) -> AnalyticsResult<SolverResult> {
    config.validate_or_error()?;

    let (lower, upper) = config.bracket;
    let finder = config.solver.finder();
    log::debug!(
        "solving NPV for {} in [{lower}, {upper}] with {}",
        npv.variable(),
        finder.name()
    );

    let f = |x: f64| npv.npv(x);
    match finder.find_root(&f, lower, upper, &config.solver_config()) {
        Ok(result) => {
            log::debug!(
                "{} = {} after {} iterations (NPV {:.6e})",
                npv.variable(),
                result.root,
                result.iterations,
                result.residual
            );
            Ok(result)
        }
        Err(err) => {
            log::warn!("{} search failed: {err}", npv.variable());
            Err(AnalyticsError::Solver(err))
        }
    }
}

/// Internal rate of return of `schedule`, as an annual effective rate.
///
/// # Example
///
/// ```rust
/// use valora_analytics::cashflows::CashflowSchedule;
/// use valora_analytics::config::ValuationConfig;
/// use valora_analytics::irr::solve_irr;
///
/// let schedule = CashflowSchedule::new(vec![-100.0, 110.0], vec![0, 365]).unwrap();
/// let result = solve_irr(&schedule, &ValuationConfig::default()).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-9);
/// ```
pub fn solve_irr(
    schedule: &CashflowSchedule,
    config: &ValuationConfig,
) -> AnalyticsResult<SolverResult> {
    let npv = FlatRateNpv::new(schedule.clone(), config.day_count_base)?;
    solve(&npv, config)
}

/// Spread over `curve` at which `schedule` has zero NPV.
pub fn solve_margin(
    schedule: &CashflowSchedule,
    curve: &ReferenceCurve,
    config: &ValuationConfig,
) -> AnalyticsResult<SolverResult> {
    let npv = MarginNpv::new(schedule.clone(), curve, config.day_count_base)?;
    solve(&npv, config)
}

/// Internal rate of return of `amounts` paid on `dates`.
///
/// Day offsets are counted from `valuation_date` under `config.day_count`.
pub fn solve_irr_on_dates(
    valuation_date: Date,
    dates: &[Date],
    amounts: Vec<f64>,
    config: &ValuationConfig,
) -> AnalyticsResult<SolverResult> {
    config.validate_or_error()?;
    let schedule = CashflowSchedule::from_dates(valuation_date, dates, amounts, config.day_count)?;
    solve_irr(&schedule, config)
}

/// Spread over `curve` at which `amounts` paid on `dates` have zero NPV.
///
/// Day offsets are counted from `valuation_date` under `config.day_count`.
pub fn solve_margin_on_dates(
    valuation_date: Date,
    dates: &[Date],
    amounts: Vec<f64>,
    curve: &ReferenceCurve,
    config: &ValuationConfig,
) -> AnalyticsResult<SolverResult> {
    config.validate_or_error()?;
    let schedule = CashflowSchedule::from_dates(valuation_date, dates, amounts, config.day_count)?;
    solve_margin(&schedule, curve, config)
}
