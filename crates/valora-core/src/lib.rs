//! # Valora Core
//!
//! Domain-specific numerical building blocks for time-value-of-money work on
//! fixed income cashflows:
//!
//! - **Calendar arithmetic**: [`Date`] with leap-year rules, month ends,
//!   spreadsheet-style `EDATE`, and leap/common day splits
//! - **Schedules**: backward-anchored periodic date generation
//! - **Day count conventions**: 30/360, 30/360 US, ACT/365 Fixed, ACT/ACT ISDA
//! - **Rate conversions**: nominal/effective, matured/anticipated, and
//!   periodicity changes walked over a fixed equivalence graph
//!
//! Everything here is a pure function over immutable values, so every
//! operation can be called concurrently without synchronization.
//!
//! ## Example
//!
//! ```rust
//! use valora_core::prelude::*;
//!
//! let start = Date::from_ymd(2012, 2, 5).unwrap();
//! let end = Date::from_ymd(2012, 4, 6).unwrap();
//! let yf = DayCountConvention::Thirty360.fraction(start, end).unwrap();
//! assert_eq!((yf.numerator(), yf.denominator()), (61, 360));
//!
//! let ibr = InterestRate::new(0.032, 12.0, RateQuoteCase::Mnr1);
//! let aer = ibr.to_annual_effective().unwrap();
//! assert!(aer > 0.032);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod daycounts;
pub mod error;
pub mod rates;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention, YearFraction};
    pub use crate::error::{ValoraError, ValoraResult};
    pub use crate::rates::{convert_rate, InterestRate, RateQuoteCase, SpreadMode};
    pub use crate::schedule::generate_periodic_dates;
    pub use crate::types::{is_leap_year, Date, YearTypeSplit};
}

// Re-export commonly used types at crate root
pub use error::{ValoraError, ValoraResult};
pub use types::Date;
