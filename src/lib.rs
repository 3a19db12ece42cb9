//! # Describe
//!
//! Descriptive statistics for Rust.
//!
//! Describe accumulates numeric observations in memory and computes exact
//! summary statistics over them on demand.
//!
//! ## Features
//!
//! - **Summary**: min, max, count, sum, mean and population standard deviation
//! - **Percentiles**: linear interpolation between order statistics, for any
//!   configured set of ranks
//! - **Quartiles**: Q1/median/Q3 by recursive median of halves, plus IQR
//! - **Typed observations**: integer data keeps integral extrema and sums
//!
//! ## Quick Start
//!
//! ```rust
//! use describe::prelude::*;
//!
//! let mut stats = Statistics::new();
//! for latency_ms in [12, 15, 11, 40, 13, 14, 90] {
//!     stats.update(latency_ms).unwrap();
//! }
//!
//! let summary = stats.compute().unwrap();
//! println!("median: {}", summary["median"]);
//! println!("p90: {}", summary["90th"]);
//!
//! assert_eq!(stats.percentile(50).unwrap(), 14.0);
//! assert_eq!(stats.quantile(Quartile::Lower).unwrap(), 12.0);
//! ```
//!
//! ## Percentile Ranks
//!
//! Integer ranks are percentages in `[0, 100]`, real ranks are fractions in
//! `[0.0, 1.0]`. The argument's type picks the range, so `50` and `0.5` are
//! the same rank while `50.0` is rejected:
//!
//! ```rust
//! use describe::prelude::*;
//!
//! let mut stats = Statistics::new();
//! stats.try_extend(0..=10).unwrap();
//!
//! assert_eq!(stats.percentile(50).unwrap(), 5.0);
//! assert_eq!(stats.percentile(0.5).unwrap(), 5.0);
//! assert!(matches!(stats.percentile(50.0), Err(StatsError::Range(_))));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of results

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod math;
pub mod quantiles;
pub mod statistics;
pub mod value;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::quantiles::{Quartile, Rank};
    pub use crate::statistics::{Statistics, Summary, DEFAULT_PERCENTILE_RANKS};
    pub use crate::value::{IntoValue, Value};
}

pub use quantiles::{percentile, quantile, Quartile, Rank};
pub use statistics::{Statistics, Summary};
pub use traits::{RangeError, StatsError};
pub use value::Value;
