//! NPV at a single flat discount rate.

use ndarray::{Array1, Zip};

use super::{check_day_count_base, log_schedule, NpvFunction};
use crate::cashflows::CashflowSchedule;
use crate::error::AnalyticsResult;

/// `NPV(r) = Σ c_k / (1 + r)^(d_k / B)`.
///
/// Its root is the internal rate of return of the schedule, as an annual
/// effective rate when `B` is the length of a year in days.
#[derive(Debug, Clone)]
pub struct FlatRateNpv {
    schedule: CashflowSchedule,
    times: Array1<f64>,
    day_count_base: f64,
}

impl FlatRateNpv {
    /// Captures `schedule` with year fractions `d_k / day_count_base`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `day_count_base` is not positive and finite.
    pub fn new(schedule: CashflowSchedule, day_count_base: f64) -> AnalyticsResult<Self> {
        check_day_count_base(day_count_base)?;
        log_schedule("flat rate", &schedule, None);

        let times = schedule.times(day_count_base);
        Ok(Self {
            schedule,
            times,
            day_count_base,
        })
    }

    /// The captured schedule.
    pub fn schedule(&self) -> &CashflowSchedule {
        &self.schedule
    }

    /// Days per year used to turn offsets into year fractions.
    pub fn day_count_base(&self) -> f64 {
        self.day_count_base
    }
}

impl NpvFunction for FlatRateNpv {
    fn npv(&self, rate: f64) -> f64 {
        let growth = 1.0 + rate;
        Zip::from(self.schedule.amounts())
            .and(&self.times)
            .fold(0.0, |acc, &amount, &t| acc + amount / growth.powf(t))
    }

    fn derivative(&self, rate: f64) -> f64 {
        let growth = 1.0 + rate;
        Zip::from(self.schedule.amounts())
            .and(&self.times)
            .fold(0.0, |acc, &amount, &t| acc - t * amount / growth.powf(t + 1.0))
    }

    fn variable(&self) -> &'static str {
        "rate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn npv(amounts: Vec<f64>, days: Vec<i64>) -> FlatRateNpv {
        FlatRateNpv::new(CashflowSchedule::new(amounts, days).unwrap(), 365.0).unwrap()
    }

    #[test]
    fn test_single_period() {
        let f = npv(vec![-100.0, 105.0], vec![0, 365]);
        assert_relative_eq!(f.npv(0.05), 0.0, epsilon = 1e-12);
        assert!(f.npv(0.04) > 0.0);
        assert!(f.npv(0.06) < 0.0);
    }

    #[test]
    fn test_zero_rate_is_undiscounted_total() {
        let f = npv(vec![-50.0, 20.0, 40.0], vec![0, 100, 400]);
        assert_relative_eq!(f.npv(0.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_year() {
        let f = npv(vec![1000.0], vec![182]);
        assert_relative_eq!(f.npv(0.1), 1000.0 / 1.1f64.powf(182.0 / 365.0), epsilon = 1e-9);
    }

    #[test]
    fn test_negative_offset_compounds_forward() {
        let f = npv(vec![100.0], vec![-365]);
        assert_relative_eq!(f.npv(0.1), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let f = npv(
            vec![-1_003_000.0, 5000.0, 5000.0, 5000.0, 5000.0, 1_000_000.0],
            vec![0, 28, 118, 208, 298, 298],
        );
        let h = 1e-6;
        for rate in [-0.5, 0.0, 0.021, 0.3] {
            let numeric = (f.npv(rate + h) - f.npv(rate - h)) / (2.0 * h);
            assert_relative_eq!(f.derivative(rate), numeric, max_relative = 1e-5);
            assert!(f.derivative(rate) < 0.0);
        }
    }

    #[test]
    fn test_accessors() {
        let f = npv(vec![-1.0, 2.0], vec![0, 30]);
        assert_eq!(f.schedule().len(), 2);
        assert_eq!(f.day_count_base(), 365.0);
        assert_eq!(f.variable(), "rate");
    }

    #[test]
    fn test_rejects_bad_base() {
        let schedule = CashflowSchedule::new(vec![1.0], vec![0]).unwrap();
        assert!(FlatRateNpv::new(schedule.clone(), -365.0).is_err());
        assert!(FlatRateNpv::new(schedule, f64::INFINITY).is_err());
    }
}
