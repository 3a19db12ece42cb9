//! Quartiles by recursive median of halves
//!
//! Q1 is the median of the lower half of the sorted data, Q3 the median of
//! the upper half. The halves split at `n / 2`, so for odd `n` the middle
//! element belongs to the upper half. This differs from the 25th and 75th
//! [`percentile`](super::percentile) of the same data and is kept separate.

use crate::traits::StatsError;

/// Quartile selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quartile {
    /// Q1, median of the lower half
    Lower,
    /// Q2, median of the whole set
    #[default]
    Median,
    /// Q3, median of the upper half
    Upper,
}

impl Quartile {
    /// Map a numeric selector: `1` is Q1, `3` is Q3, anything else is Q2
    pub fn from_selector(which: i64) -> Self {
        match which {
            1 => Quartile::Lower,
            3 => Quartile::Upper,
            _ => Quartile::Median,
        }
    }
}

/// Quartile of unsorted data
///
/// # Errors
///
/// [`StatsError::EmptyDataset`] if `values` is empty.
///
/// # Example
///
/// ```
/// use describe::quantiles::{quantile, Quartile};
///
/// let values = [7.0, 1.0, 3.0, 5.0, 9.0, 11.0];
/// assert_eq!(quantile(&values, Quartile::Lower).unwrap(), 3.0);
/// assert_eq!(quantile(&values, Quartile::Median).unwrap(), 6.0);
/// assert_eq!(quantile(&values, Quartile::Upper).unwrap(), 9.0);
/// ```
pub fn quantile(values: &[f64], which: Quartile) -> Result<f64, StatsError> {
    match values {
        [] => Err(StatsError::EmptyDataset),
        [only] => Ok(*only),
        _ => quantile_sorted(&super::sorted_copy(values), which),
    }
}

/// Quartile of ascending-sorted data
///
/// # Errors
///
/// [`StatsError::EmptyDataset`] if `sorted` is empty.
pub fn quantile_sorted(sorted: &[f64], which: Quartile) -> Result<f64, StatsError> {
    let n = sorted.len();
    match n {
        0 => return Err(StatsError::EmptyDataset),
        1 => return Ok(sorted[0]),
        _ => {}
    }

    let mid = n >> 1;
    match which {
        Quartile::Lower => quantile_sorted(&sorted[..mid], Quartile::Median),
        Quartile::Upper => quantile_sorted(&sorted[mid..], Quartile::Median),
        Quartile::Median if n & 1 == 1 => Ok(sorted[mid]),
        Quartile::Median => Ok((sorted[mid - 1] + sorted[mid]) / 2.0),
    }
}
