//! Elementary rate equivalence transforms.

/// Nominal rate to the effective rate of one period.
#[inline]
#[must_use]
pub fn nominal_to_effective(rate: f64, periods_per_year: f64) -> f64 {
    rate / periods_per_year
}

/// Effective rate of one period to the nominal annual rate.
#[inline]
#[must_use]
pub fn effective_to_nominal(rate: f64, periods_per_year: f64) -> f64 {
    rate * periods_per_year
}

/// Effective rate for `p1` periods a year to the equivalent for `p2`.
///
/// $$(1 + i_1)^{p_1} = (1 + i_2)^{p_2}$$
#[inline]
#[must_use]
pub fn change_periodicity(rate: f64, p1: f64, p2: f64) -> f64 {
    (1.0 + rate).powf(p1 / p2) - 1.0
}

/// Matured (paid at period end) rate to its anticipated equivalent.
#[inline]
#[must_use]
pub fn matured_to_anticipated(rate: f64) -> f64 {
    rate / (1.0 + rate)
}

/// Anticipated (paid at period start) rate to its matured equivalent.
#[inline]
#[must_use]
pub fn anticipated_to_matured(rate: f64) -> f64 {
    rate / (1.0 - rate)
}

/// The five transforms that label edges of the conversion graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// [`nominal_to_effective`]
    NominalToEffective,
    /// [`effective_to_nominal`]
    EffectiveToNominal,
    /// [`change_periodicity`]
    ChangePeriodicity,
    /// [`matured_to_anticipated`]
    MaturedToAnticipated,
    /// [`anticipated_to_matured`]
    AnticipatedToMatured,
}

impl Transform {
    /// Applies the transform.
    ///
    /// Nominal rates are only ever de-nominalised on the source side and
    /// re-nominalised on the target side of the graph, so the former uses
    /// `source_piy` and the latter `target_piy`.
    #[must_use]
    pub fn apply(self, rate: f64, source_piy: f64, target_piy: f64) -> f64 {
        match self {
            Self::NominalToEffective => nominal_to_effective(rate, source_piy),
            Self::EffectiveToNominal => effective_to_nominal(rate, target_piy),
            Self::ChangePeriodicity => change_periodicity(rate, source_piy, target_piy),
            Self::MaturedToAnticipated => matured_to_anticipated(rate),
            Self::AnticipatedToMatured => anticipated_to_matured(rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nominal_effective_inverse() {
        let eff = nominal_to_effective(0.12, 12.0);
        assert_relative_eq!(eff, 0.01, epsilon = 1e-15);
        assert_relative_eq!(effective_to_nominal(eff, 12.0), 0.12, epsilon = 1e-15);
    }

    #[test]
    fn test_change_periodicity_monthly_to_annual() {
        let annual = change_periodicity(0.01, 12.0, 1.0);
        assert_relative_eq!(annual, 1.01f64.powi(12) - 1.0, epsilon = 1e-15);
        assert_relative_eq!(change_periodicity(annual, 1.0, 12.0), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_same_periodicity_is_identity() {
        assert_relative_eq!(change_periodicity(0.07, 4.0, 4.0), 0.07, epsilon = 1e-15);
    }

    #[test]
    fn test_anticipated_matured_inverse() {
        let ant = matured_to_anticipated(0.1);
        assert_relative_eq!(ant, 0.1 / 1.1);
        assert_relative_eq!(anticipated_to_matured(ant), 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_apply_picks_side_periodicity() {
        let to_effective = Transform::NominalToEffective.apply(0.12, 12.0, 4.0);
        let to_nominal = Transform::EffectiveToNominal.apply(0.03, 12.0, 4.0);
        assert_relative_eq!(to_effective, 0.01, epsilon = 1e-15);
        assert_relative_eq!(to_nominal, 0.12, epsilon = 1e-15);
    }
}
