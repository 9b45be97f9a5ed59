//! # Valora Math
//!
//! Numerical root finding for the Valora engine.
//!
//! The solvers here are generic over any `Fn(f64) -> f64` and know nothing
//! about cashflows or rates. Both require a sign-changing bracket:
//!
//! - [`solvers::brent`]: inverse quadratic interpolation with bisection
//!   fallback
//! - [`solvers::bisection`]: plain interval halving
//!
//! ```rust
//! use valora_math::solvers::{brent, SolverConfig};
//!
//! let result = brent(|x: f64| x * x - 2.0, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, brent, BisectionSolver, BrentSolver, RootFinder, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
