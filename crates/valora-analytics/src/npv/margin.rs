//! NPV at a spread over a reference curve.

use ndarray::{Array1, ArrayView1, Zip};

use super::{check_day_count_base, log_schedule, NpvFunction};
use crate::cashflows::{CashflowSchedule, ReferenceCurve};
use crate::error::AnalyticsResult;

/// `NPV(s) = Σ c_k / ((1 + ref_k)(1 + s))^(d_k / B)`.
///
/// Each flow is discounted at its reference rate compounded with a common
/// spread. The root is the spread (margin) at which the schedule prices to
/// zero.
#[derive(Debug, Clone)]
pub struct MarginNpv {
    schedule: CashflowSchedule,
    reference: Array1<f64>,
    times: Array1<f64>,
    day_count_base: f64,
}

impl MarginNpv {
    /// Captures `schedule` and the reference rates broadcast onto it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the curve has neither one rate nor one per
    /// flow, or `day_count_base` is not positive and finite.
    pub fn new(
        schedule: CashflowSchedule,
        curve: &ReferenceCurve,
        day_count_base: f64,
    ) -> AnalyticsResult<Self> {
        check_day_count_base(day_count_base)?;
        let reference = curve.broadcast(schedule.len())?;
        log_schedule("margin", &schedule, Some(reference.view()));

        let times = schedule.times(day_count_base);
        Ok(Self {
            schedule,
            reference,
            times,
            day_count_base,
        })
    }

    /// The captured schedule.
    pub fn schedule(&self) -> &CashflowSchedule {
        &self.schedule
    }

    /// Reference rate of each flow.
    pub fn reference_rates(&self) -> ArrayView1<'_, f64> {
        self.reference.view()
    }

    /// Days per year used to turn offsets into year fractions.
    pub fn day_count_base(&self) -> f64 {
        self.day_count_base
    }
}

impl NpvFunction for MarginNpv {
    fn npv(&self, spread: f64) -> f64 {
        let spread_growth = 1.0 + spread;
        Zip::from(self.schedule.amounts())
            .and(&self.reference)
            .and(&self.times)
            .fold(0.0, |acc, &amount, &rate, &t| {
                acc + amount / ((1.0 + rate) * spread_growth).powf(t)
            })
    }

    fn derivative(&self, spread: f64) -> f64 {
        let spread_growth = 1.0 + spread;
        Zip::from(self.schedule.amounts())
            .and(&self.reference)
            .and(&self.times)
            .fold(0.0, |acc, &amount, &rate, &t| {
                let growth = 1.0 + rate;
                acc - t * amount * growth / (growth * spread_growth).powf(t + 1.0)
            })
    }

    fn variable(&self) -> &'static str {
        "spread"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npv::FlatRateNpv;
    use approx::assert_relative_eq;

    fn literal_schedule() -> CashflowSchedule {
        CashflowSchedule::new(
            vec![-1_003_000.0, 5000.0, 5000.0, 5000.0, 5000.0, 1_000_000.0],
            vec![0, 28, 118, 208, 298, 298],
        )
        .unwrap()
    }

    #[test]
    fn test_flat_reference_is_compounded_flat_rate() {
        let margin = MarginNpv::new(literal_schedule(), &ReferenceCurve::flat(0.052).unwrap(), 365.0).unwrap();
        let flat = FlatRateNpv::new(literal_schedule(), 365.0).unwrap();

        for spread in [-0.03, 0.0, 0.01, 0.2] {
            let combined = 1.052 * (1.0 + spread) - 1.0;
            assert_relative_eq!(margin.npv(spread), flat.npv(combined), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_reference_matches_flat() {
        let margin = MarginNpv::new(literal_schedule(), &ReferenceCurve::flat(0.0).unwrap(), 365.0).unwrap();
        let flat = FlatRateNpv::new(literal_schedule(), 365.0).unwrap();
        assert_eq!(margin.npv(0.04), flat.npv(0.04));
    }

    #[test]
    fn test_per_flow_reference() {
        let schedule = CashflowSchedule::new(vec![100.0, 100.0], vec![365, 730]).unwrap();
        let curve = ReferenceCurve::new(vec![0.05, 0.10]).unwrap();
        let margin = MarginNpv::new(schedule, &curve, 365.0).unwrap();

        let expected = 100.0 / 1.05 + 100.0 / 1.1f64.powi(2);
        assert_relative_eq!(margin.npv(0.0), expected, epsilon = 1e-10);
        assert_eq!(margin.reference_rates().to_vec(), vec![0.05, 0.10]);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let curve = ReferenceCurve::new(vec![0.05, 0.051, 0.052, 0.053, 0.054, 0.054]).unwrap();
        let margin = MarginNpv::new(literal_schedule(), &curve, 365.0).unwrap();
        let h = 1e-6;
        for spread in [-0.4, -0.03, 0.0, 0.25] {
            let numeric = (margin.npv(spread + h) - margin.npv(spread - h)) / (2.0 * h);
            assert_relative_eq!(margin.derivative(spread), numeric, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_curve_length_checked_on_construction() {
        let curve = ReferenceCurve::new(vec![0.05, 0.05]).unwrap();
        assert!(MarginNpv::new(literal_schedule(), &curve, 365.0).is_err());
    }

    #[test]
    fn test_accessors() {
        let margin = MarginNpv::new(literal_schedule(), &ReferenceCurve::flat(0.052).unwrap(), 360.0).unwrap();
        assert_eq!(margin.schedule().len(), 6);
        assert_eq!(margin.day_count_base(), 360.0);
        assert_eq!(margin.variable(), "spread");
    }
}
