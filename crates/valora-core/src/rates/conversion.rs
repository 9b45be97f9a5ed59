//! Rate conversion over the equivalence graph.

use super::quote::RateQuoteCase;
use crate::error::{ValoraError, ValoraResult};

fn check_periods(label: &str, periods_per_year: f64) -> ValoraResult<()> {
    if periods_per_year.is_finite() && periods_per_year > 0.0 {
        Ok(())
    } else {
        Err(ValoraError::invalid_input(format!(
            "{label} periods per year must be positive and finite, got {periods_per_year}"
        )))
    }
}

/// Converts a rate to an equivalent one under another quotation convention.
///
/// Walks the conversion graph from `source` to `target`, applying the
/// transform on each edge. The whole path is resolved before any arithmetic,
/// so an unreachable target fails without a partial result.
///
/// # Arguments
///
/// * `rate` - Rate to convert, as a fraction (not a percentage)
/// * `source` - Quotation case of `rate`
/// * `source_piy` - Periods per year of `rate`
/// * `target` - Requested quotation case
/// * `target_piy` - Periods per year of the requested rate
///
/// # Errors
///
/// Returns `ValoraError::InvalidInput` if `target` is not reachable from
/// `source`, or either periods-per-year value is not positive and finite.
///
/// # Example
///
/// ```rust
/// use valora_core::rates::{convert_rate, RateQuoteCase};
///
/// // 12% nominal monthly to annual effective
/// let aer = convert_rate(0.12, RateQuoteCase::Mnr1, 12.0, RateQuoteCase::Emr2, 1.0).unwrap();
/// assert!((aer - (1.01f64.powi(12) - 1.0)).abs() < 1e-12);
/// ```
pub fn convert_rate(
    rate: f64,
    source: RateQuoteCase,
    source_piy: f64,
    target: RateQuoteCase,
    target_piy: f64,
) -> ValoraResult<f64> {
    check_periods("source", source_piy)?;
    check_periods("target", target_piy)?;
    let path = source.path_to(target)?;

    log::debug!(
        "converting {rate}[{source}] with {source_piy} periods a year to [{target}] with {target_piy}"
    );

    let mut case = source;
    let mut value = rate;
    for edge in path {
        let next_value = edge.transform.apply(value, source_piy, target_piy);
        log::debug!("{value}[{case}] -> {next_value}[{}]", edge.next);
        value = next_value;
        case = edge.next;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use RateQuoteCase::{Aer1, Aer2, Anr1, Anr2, Emr1, Emr2, Mnr1, Mnr2};

    #[test]
    fn test_identity() {
        assert_eq!(convert_rate(0.05, Emr2, 1.0, Emr2, 1.0).unwrap(), 0.05);
    }

    #[test]
    fn test_monthly_nominal_to_annual_effective() {
        let aer = convert_rate(0.032, Mnr1, 12.0, Emr2, 1.0).unwrap();
        assert_relative_eq!(aer, (1.0 + 0.032 / 12.0f64).powi(12) - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_anticipated_nominal_to_annual_effective() {
        // 10% nominal quarterly in advance: 2.5% anticipated -> 0.025/0.975 matured
        let aer = convert_rate(0.10, Anr1, 4.0, Emr2, 1.0).unwrap();
        let matured: f64 = 0.025 / 0.975;
        assert_relative_eq!(aer, (1.0 + matured).powi(4) - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_to_target_nominal() {
        // 12.68% annual effective to monthly nominal
        let annual = 1.01f64.powi(12) - 1.0;
        let nominal = convert_rate(annual, Emr1, 1.0, Mnr2, 12.0).unwrap();
        assert_relative_eq!(nominal, 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_to_target_anticipated_nominal() {
        let anr = convert_rate(0.10, Emr1, 1.0, Anr2, 1.0).unwrap();
        assert_relative_eq!(anr, 0.10 / 1.10, epsilon = 1e-15);

        let aer = convert_rate(0.10, Emr1, 1.0, Aer2, 1.0).unwrap();
        assert_relative_eq!(aer, anr, epsilon = 1e-15);
    }

    #[test]
    fn test_anticipated_round_trip_through_full_graph() {
        let anr = convert_rate(0.08, Anr1, 4.0, Anr2, 4.0).unwrap();
        assert_relative_eq!(anr, 0.08, epsilon = 1e-14);

        let aer = convert_rate(0.02, Aer1, 4.0, Aer2, 4.0).unwrap();
        assert_relative_eq!(aer, 0.02, epsilon = 1e-14);
    }

    #[test]
    fn test_unreachable_target_is_invalid_input() {
        let result = convert_rate(0.05, Emr2, 1.0, Mnr1, 12.0);
        assert!(matches!(result, Err(ValoraError::InvalidInput { .. })));

        let result = convert_rate(0.05, Mnr2, 12.0, Emr2, 1.0);
        assert!(matches!(result, Err(ValoraError::InvalidInput { .. })));
    }

    #[test]
    fn test_invalid_periods() {
        assert!(convert_rate(0.05, Mnr1, 0.0, Emr2, 1.0).is_err());
        assert!(convert_rate(0.05, Mnr1, 12.0, Emr2, -1.0).is_err());
        assert!(convert_rate(0.05, Mnr1, f64::NAN, Emr2, 1.0).is_err());
    }

    #[test]
    fn test_irregular_periodicity() {
        // 28-day periods: 360/28 periods per year
        let piy = 360.0 / 28.0;
        let aer = convert_rate(0.032, Mnr1, piy, Emr2, 1.0).unwrap();
        assert_relative_eq!(aer, (1.0 + 0.032 / piy).powf(piy) - 1.0, epsilon = 1e-14);
    }

    proptest! {
        #[test]
        fn nominal_round_trip(
            rate in -0.5f64..0.5,
            piy_index in 0usize..5,
        ) {
            let piy = [1.0, 2.0, 4.0, 12.0, 360.0 / 28.0][piy_index];
            let effective = convert_rate(rate, Mnr1, piy, Emr2, piy).unwrap();
            let back = convert_rate(effective, Emr1, piy, Mnr2, piy).unwrap();
            prop_assert!((back - rate).abs() < 1e-12);
        }

        #[test]
        fn periodicity_round_trip(
            rate in 0.0f64..0.3,
            p1 in 1.0f64..365.0,
            p2 in 1.0f64..365.0,
        ) {
            let there = convert_rate(rate, Emr1, p1, Emr2, p2).unwrap();
            let back = convert_rate(there, Emr1, p2, Emr2, p1).unwrap();
            prop_assert!((back - rate).abs() < 1e-10);
        }
    }
}
