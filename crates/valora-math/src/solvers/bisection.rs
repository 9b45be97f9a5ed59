//! Bisection root-finding algorithm.

use super::{check_bracket, SolverConfig, SolverResult};
use crate::error::{MathError, MathResult};

/// Bisection root-finding algorithm.
///
/// Halves the bracket until its half-width drops below `tolerance` or the
/// midpoint is an exact zero. Slow but needs nothing beyond a sign change.
///
/// # Errors
///
/// * `MathError::InvalidBracket` if `f(a)` and `f(b)` have the same sign
/// * `MathError::InvalidInput` for a non-finite bracket or configuration
/// * `MathError::ConvergenceFailed` if `max_iterations` is exhausted
///
/// # Example
///
/// ```rust
/// use valora_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut lo = a.min(b);
    let mut hi = a.max(b);
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    check_bracket(lo, hi, f_lo, f_hi)?;

    log::debug!("bisection: bracket [{lo}, {hi}], f = [{f_lo:.6e}, {f_hi:.6e}]");

    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    for iteration in 1..=config.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);

        if f_mid == 0.0 || 0.5 * (hi - lo) < config.tolerance {
            log::debug!("bisection: root {mid} after {iteration} iterations (residual {f_mid:.3e})");
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: f_mid,
            });
        }

        if (f_mid > 0.0) == (f_lo > 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    let mid = 0.5 * (lo + hi);
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 2.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let result = bisection(|x: f64| x - 1.0, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;

        let result = bisection(f, -2.0, 0.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_decreasing_function() {
        let f = |x: f64| 0.25 - x;

        let result = bisection(f, -0.999, 0.999, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.25, epsilon = 1e-10);
    }

    #[test]
    fn test_root_independent_of_function_scale() {
        for scale in [1e-8, 1e-6, 1.0, 1e6, 1e10] {
            let f = move |r: f64| scale * (-1.0 + 1.1 / (1.0 + r));

            let result = bisection(f, -0.999, 0.999, &SolverConfig::default()).unwrap();

            assert!((result.root - 0.1).abs() < 1e-9, "scale {scale}: {}", result.root);
        }
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let config = SolverConfig::default().with_max_iterations(5);

        let result = bisection(|x: f64| x - 0.3, 0.0, 1.0, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 5, .. })
        ));
    }
}
