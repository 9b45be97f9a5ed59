//! Bracketed root finders.
//!
//! Both solvers need `f(a)` and `f(b)` of opposite sign and keep the root
//! bracketed for the whole search, so they cannot diverge:
//!
//! | Solver | Convergence | Evaluations for 1e-10 on a unit bracket |
//! |--------|-------------|------------------------------------------|
//! | [`brent`] | superlinear | typically under 15 |
//! | [`bisection`] | linear | about 34 |
//!
//! [`RootFinder`] puts either behind a trait object so callers can pick the
//! algorithm from configuration.

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the root.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite and that at least
    /// one iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "solver tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "solver needs at least one iteration",
            ));
        }
        Ok(())
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}

/// Object-safe interface over the bracketed solvers.
///
/// # Example
///
/// ```rust
/// use valora_math::solvers::{BisectionSolver, BrentSolver, RootFinder, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let config = SolverConfig::default();
/// let finders: [&dyn RootFinder; 2] = [&BrentSolver, &BisectionSolver];
/// for finder in finders {
///     let result = finder.find_root(&f, 1.0, 2.0, &config).unwrap();
///     assert!((result.root - 1.521_379_706_8).abs() < 1e-9);
/// }
/// ```
pub trait RootFinder: Send + Sync {
    /// Finds a root of `f` inside `[a, b]`.
    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Brent's method behind [`RootFinder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentSolver;

impl RootFinder for BrentSolver {
    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult> {
        brent(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Brent"
    }
}

/// Bisection behind [`RootFinder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl RootFinder for BisectionSolver {
    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult> {
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Validates a bracket and its end-point values.
fn check_bracket(a: f64, b: f64, fa: f64, fb: f64) -> MathResult<()> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "bracket bounds must be finite, got [{a}, {b}]"
        )));
    }
    if fa.is_nan() || fb.is_nan() {
        return Err(MathError::invalid_input(format!(
            "function is undefined at the bracket [{a}, {b}]"
        )));
    }
    if fa * fb > 0.0 {
        return Err(MathError::invalid_bracket(a, b, fa, fb));
    }
    Ok(())
}
