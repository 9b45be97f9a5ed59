//! Cashflow schedules and reference rate curves.

use ndarray::{Array1, ArrayView1};

use valora_core::daycounts::DayCountConvention;
use valora_core::rates::InterestRate;
use valora_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Amounts paid or received at given day offsets from a valuation date.
///
/// Offsets may be negative (flows before the valuation date) and need not be
/// sorted. Negative amounts are outflows.
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowSchedule {
    amounts: Array1<f64>,
    day_offsets: Array1<i64>,
}

impl CashflowSchedule {
    /// Creates a schedule from parallel amount and day offset vectors.
    ///
    /// # Errors
    ///
    /// Returns the core `InvalidInput` error if the vectors differ in length,
    /// are empty, or an amount is not finite.
    pub fn new(amounts: Vec<f64>, day_offsets: Vec<i64>) -> AnalyticsResult<Self> {
        if amounts.len() != day_offsets.len() {
            return Err(AnalyticsError::invalid_input(format!(
                "{} cashflows but {} day offsets",
                amounts.len(),
                day_offsets.len()
            )));
        }
        if amounts.is_empty() {
            return Err(AnalyticsError::invalid_input(
                "cashflow schedule needs at least one flow",
            ));
        }
        if let Some(position) = amounts.iter().position(|a| !a.is_finite()) {
            return Err(AnalyticsError::invalid_input(format!(
                "cashflow {position} is not finite: {}",
                amounts[position]
            )));
        }

        Ok(Self {
            amounts: Array1::from(amounts),
            day_offsets: Array1::from(day_offsets),
        })
    }

    /// Creates a schedule from payment dates, counting days from `valuation_date`
    /// under `convention`.
    ///
    /// # Errors
    ///
    /// Fails on mismatched lengths, or with `UnsupportedConvention` for a
    /// declared but unimplemented convention.
    pub fn from_dates(
        valuation_date: Date,
        dates: &[Date],
        amounts: Vec<f64>,
        convention: DayCountConvention,
    ) -> AnalyticsResult<Self> {
        let day_count = convention.to_day_count()?;
        let day_offsets = dates
            .iter()
            .map(|date| day_count.day_count(valuation_date, *date))
            .collect();
        Self::new(amounts, day_offsets)
    }

    /// Number of flows.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false: a schedule holds at least one flow.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Cashflow amounts.
    pub fn amounts(&self) -> ArrayView1<'_, f64> {
        self.amounts.view()
    }

    /// Day offsets of the flows.
    pub fn day_offsets(&self) -> ArrayView1<'_, i64> {
        self.day_offsets.view()
    }

    /// Undiscounted sum of the amounts.
    pub fn total(&self) -> f64 {
        self.amounts.sum()
    }

    /// Flow times in years, `day_offset / day_count_base`.
    pub fn times(&self, day_count_base: f64) -> Array1<f64> {
        self.day_offsets.mapv(|days| days as f64 / day_count_base)
    }
}

/// Annual effective reference rates, one per flow or a single flat rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    rates: Vec<f64>,
}

impl ReferenceCurve {
    /// Creates a curve from annual effective rates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `rates` is empty or holds a non-finite rate.
    pub fn new(rates: Vec<f64>) -> AnalyticsResult<Self> {
        if rates.is_empty() {
            return Err(AnalyticsError::invalid_input(
                "reference curve needs at least one rate",
            ));
        }
        if let Some(position) = rates.iter().position(|r| !r.is_finite()) {
            return Err(AnalyticsError::invalid_input(format!(
                "reference rate {position} is not finite: {}",
                rates[position]
            )));
        }
        Ok(Self { rates })
    }

    /// A single rate applied to every flow.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-finite rate.
    pub fn flat(rate: f64) -> AnalyticsResult<Self> {
        Self::new(vec![rate])
    }

    /// Builds a curve from quoted rates, each converted to annual effective.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures (e.g. a target-side quotation that
    /// cannot reach the annual effective case).
    pub fn from_rates(rates: &[InterestRate]) -> AnalyticsResult<Self> {
        let effective = rates
            .iter()
            .map(InterestRate::to_annual_effective)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(effective)
    }

    /// The rates as given.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns true for a single broadcast rate.
    pub fn is_flat(&self) -> bool {
        self.rates.len() == 1
    }

    /// Expands the curve to one rate per flow.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless the curve has one rate or exactly `len`.
    pub fn broadcast(&self, len: usize) -> AnalyticsResult<Array1<f64>> {
        match self.rates.as_slice() {
            [rate] => Ok(Array1::from_elem(len, *rate)),
            rates if rates.len() == len => Ok(Array1::from(rates.to_vec())),
            rates => Err(AnalyticsError::invalid_input(format!(
                "{} reference rates for {len} cashflows, expected 1 or {len}",
                rates.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valora_core::rates::RateQuoteCase;
    use valora_core::ValoraError;

    fn literal_schedule() -> CashflowSchedule {
        CashflowSchedule::new(
            vec![-1_003_000.0, 5000.0, 5000.0, 5000.0, 5000.0, 1_000_000.0],
            vec![0, 28, 118, 208, 298, 298],
        )
        .unwrap()
    }

    #[test]
    fn test_schedule_accessors() {
        let schedule = literal_schedule();
        assert_eq!(schedule.len(), 6);
        assert!(!schedule.is_empty());
        assert_relative_eq!(schedule.total(), 17_000.0);
        assert_eq!(schedule.day_offsets()[2], 118);

        let times = schedule.times(365.0);
        assert_relative_eq!(times[5], 298.0 / 365.0);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = CashflowSchedule::new(vec![1.0, 2.0], vec![0]).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Core(ValoraError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_empty_and_non_finite_rejected() {
        assert!(CashflowSchedule::new(vec![], vec![]).is_err());
        assert!(CashflowSchedule::new(vec![f64::NAN], vec![0]).is_err());
    }

    #[test]
    fn test_from_dates_counts_days() {
        let valuation = Date::from_ymd(2012, 1, 31).unwrap();
        let dates = [
            Date::from_ymd(2012, 1, 31).unwrap(),
            Date::from_ymd(2012, 2, 29).unwrap(),
            Date::from_ymd(2012, 7, 31).unwrap(),
        ];
        let amounts = vec![-100.0, 1.0, 101.0];

        let actual = CashflowSchedule::from_dates(
            valuation,
            &dates,
            amounts.clone(),
            DayCountConvention::Act365Fixed,
        )
        .unwrap();
        assert_eq!(actual.day_offsets().to_vec(), vec![0, 29, 182]);

        let thirty = CashflowSchedule::from_dates(
            valuation,
            &dates,
            amounts.clone(),
            DayCountConvention::Thirty360US,
        )
        .unwrap();
        assert_eq!(thirty.day_offsets().to_vec(), vec![0, 29, 180]);

        let err = CashflowSchedule::from_dates(
            valuation,
            &dates,
            amounts,
            DayCountConvention::ActActEuro,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Core(ValoraError::UnsupportedConvention { .. })
        ));
    }

    #[test]
    fn test_curve_broadcast() {
        let flat = ReferenceCurve::flat(0.052).unwrap();
        assert!(flat.is_flat());
        assert_eq!(flat.broadcast(3).unwrap().to_vec(), vec![0.052; 3]);

        let curve = ReferenceCurve::new(vec![0.05, 0.051, 0.052]).unwrap();
        assert_eq!(curve.broadcast(3).unwrap().to_vec(), vec![0.05, 0.051, 0.052]);
        assert!(curve.broadcast(4).is_err());
    }

    #[test]
    fn test_curve_validation() {
        assert!(ReferenceCurve::new(vec![]).is_err());
        assert!(ReferenceCurve::new(vec![0.05, f64::INFINITY]).is_err());
        assert!(matches!(
            ReferenceCurve::flat(f64::NAN),
            Err(AnalyticsError::Core(ValoraError::InvalidInput { .. }))
        ));
        assert!(ReferenceCurve::flat(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_curve_from_quoted_rates() {
        let ibr = InterestRate::new(0.032, 12.0, RateQuoteCase::Mnr1);
        let curve = ReferenceCurve::from_rates(&[ibr]).unwrap();
        assert_relative_eq!(
            curve.rates()[0],
            (1.0 + 0.032 / 12.0f64).powi(12) - 1.0,
            epsilon = 1e-14
        );

        let unreachable = InterestRate::new(0.05, 12.0, RateQuoteCase::Mnr2);
        assert!(ReferenceCurve::from_rates(&[unreachable]).is_err());
    }
}
