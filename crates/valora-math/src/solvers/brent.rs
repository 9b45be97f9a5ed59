//! Brent's root-finding algorithm.

use super::{check_bracket, SolverConfig, SolverResult};
use crate::error::{MathError, MathResult};

/// Brent's root-finding algorithm.
///
/// Keeps a bracketing pair and, at each step, takes an inverse quadratic or
/// secant step when it lands well inside the bracket, falling back to
/// bisection otherwise. `b` is always the best estimate and `c` the
/// contrapoint, so `f(b)` and `f(c)` have opposite signs.
///
/// Stops when half the bracket is within `tolerance` (plus a relative
/// machine-precision term) or on an exact zero. The function's scale never
/// enters the stopping rule.
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
/// use valora_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-9);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);
    check_bracket(a, b, fa, fb)?;

    log::debug!("brent: bracket [{a}, {b}], f = [{fa:.6e}, {fb:.6e}]");

    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        // Re-establish the contrapoint when b and c no longer bracket.
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let xm = 0.5 * (c - b);

        if xm.abs() <= tol || fb == 0.0 {
            log::debug!("brent: root {b} after {iteration} iterations (residual {fb:.3e})");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // secant
                (2.0 * xm * s, 1.0 - s)
            } else {
                // inverse quadratic
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(xm) };
        fb = f(b);
    }

    Err(MathError::convergence_failed(config.max_iterations, fb.abs()))
}
