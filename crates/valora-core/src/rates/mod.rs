//! Interest rate quotations and equivalence conversions.
//!
//! A rate is quoted under one of eight [`RateQuoteCase`]s: nominal or
//! effective, anticipated or matured, on the source or target side of a
//! conversion. [`convert_rate`] walks the fixed conversion graph between
//! them, applying one elementary [`Transform`] per edge.
//!
//! ```rust
//! use valora_core::rates::{convert_rate, RateQuoteCase};
//!
//! // 3.2% nominal monthly into the equivalent annual effective rate
//! let aer = convert_rate(0.032, RateQuoteCase::Mnr1, 12.0, RateQuoteCase::Emr2, 1.0).unwrap();
//! assert!((aer - ((1.0 + 0.032 / 12.0f64).powi(12) - 1.0)).abs() < 1e-14);
//! ```

mod conversion;
mod interest_rate;
mod quote;
mod transform;

pub use conversion::convert_rate;
pub use interest_rate::{InterestRate, SpreadMode};
pub use quote::{Edge, QuoteSide, RateQuoteCase, MAX_HOPS};
pub use transform::{
    anticipated_to_matured, change_periodicity, effective_to_nominal, matured_to_anticipated,
    nominal_to_effective, Transform,
};
