//! Order-statistic computations
//!
//! Two distinct cut-point methods over a fully materialized dataset:
//!
//! - [`percentile`]: linear interpolation between the order statistics
//!   bracketing `rank * (n - 1)`
//! - [`quantile`]: quartiles by recursive median of halves
//!
//! The two methods generally disagree on Q1/Q3 versus the 25th/75th
//! percentile. Both are exposed as-is.
//!
//! # Example
//!
//! ```
//! use describe::quantiles::{percentile, quantile, Quartile};
//!
//! let values = [15.0, 20.0, 35.0, 40.0, 50.0];
//!
//! assert_eq!(percentile(&values, 50).unwrap(), 35.0);
//! assert_eq!(percentile(&values, 0.25).unwrap(), 20.0);
//! assert_eq!(quantile(&values, Quartile::Lower).unwrap(), 17.5);
//! ```

mod percentile;
mod quartile;

pub use percentile::{percentile, percentile_sorted, Rank};
pub use quartile::{quantile, quantile_sorted, Quartile};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Ascending copy of `values`, stable and total over NaN
///
/// `-0.0` and `0.0` compare equal, so signed zeros keep their input order.
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| unsigned_zero(*a).total_cmp(&unsigned_zero(*b)));
    sorted
}

#[inline]
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
