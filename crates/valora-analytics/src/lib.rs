//! # Valora Analytics
//!
//! Net present value functions over dated cashflow schedules, and the
//! glue that solves them for an internal rate of return or a margin over a
//! reference curve.
//!
//! - [`cashflows`]: [`CashflowSchedule`] and [`ReferenceCurve`]
//! - [`npv`]: [`FlatRateNpv`], [`MarginNpv`] and [`build_npv_function`]
//! - [`irr`]: [`solve_irr`], [`solve_margin`] and the generic [`irr::solve`]
//! - [`config`]: [`ValuationConfig`] with serde defaults and validation
//!
//! ## Example
//!
//! ```rust
//! use valora_analytics::prelude::*;
//!
//! let schedule = CashflowSchedule::new(
//!     vec![-1_003_000.0, 5000.0, 5000.0, 5000.0, 5000.0, 1_000_000.0],
//!     vec![0, 28, 118, 208, 298, 298],
//! )
//! .unwrap();
//! let config = ValuationConfig::default();
//!
//! let irr = solve_irr(&schedule, &config).unwrap();
//! let margin = solve_margin(&schedule, &ReferenceCurve::flat(0.052).unwrap(), &config).unwrap();
//!
//! let combined = 1.052 * (1.0 + margin.root) - 1.0;
//! assert!((combined - irr.root).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod irr;
pub mod npv;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{CashflowSchedule, ReferenceCurve};
    pub use crate::config::{SolverKind, ValuationConfig};
    pub use crate::error::{AnalyticsError, AnalyticsResult, Validate, ValidationError};
    pub use crate::irr::{solve_irr, solve_irr_on_dates, solve_margin, solve_margin_on_dates};
    pub use crate::npv::{build_npv_function, FlatRateNpv, MarginNpv, NpvFunction};
}

pub use cashflows::{CashflowSchedule, ReferenceCurve};
pub use config::ValuationConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use irr::{solve_irr, solve_irr_on_dates, solve_margin, solve_margin_on_dates};
pub use npv::{build_npv_function, FlatRateNpv, MarginNpv, NpvFunction};
