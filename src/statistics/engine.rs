//! Descriptive statistics over a materialized dataset
//!
//! Every query sorts a copy of the full dataset; nothing is maintained
//! incrementally between updates.

use crate::math;
use crate::quantiles::{percentile_sorted, quantile_sorted, sorted_copy, Quartile, Rank};
use crate::traits::StatsError;
use crate::value::{IntoValue, Value};

use super::Summary;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

/// Percentile ranks reported by [`Statistics::compute`] unless reconfigured
pub const DEFAULT_PERCENTILE_RANKS: [i64; 8] = [10, 30, 50, 70, 90, 95, 97, 99];

/// Decimal places for mean, median, quartiles and percentiles
const PLACES: i32 = 3;

/// Decimal places for the standard deviation
const STDDEV_PLACES: i32 = 7;

/// Descriptive statistics accumulator
///
/// Stores every observation in insertion order and computes summary
/// statistics on demand: extrema, count, sum, mean, population standard
/// deviation, median, quartiles, interquartile range and a configurable set
/// of percentile ranks.
///
/// Observations are never removed or modified. Insertion order is kept but
/// does not influence any statistic, except for floating-point summation
/// order.
///
/// # Thread Safety
///
/// `Statistics` holds no internal synchronization. To share it across
/// threads, wrap it in `Arc<Mutex<_>>`.
///
/// # Example
///
/// ```
/// use describe::statistics::Statistics;
///
/// let mut stats = Statistics::new();
/// for v in [2, 4, 4, 4, 5, 5, 7, 9] {
///     stats.update(v).unwrap();
/// }
///
/// let summary = stats.compute().unwrap();
/// assert_eq!(summary.get_f64("mean"), Some(5.0));
/// assert_eq!(summary.get_f64("stddev"), Some(2.0));
/// assert_eq!(summary.get_f64("q1"), Some(4.0));
/// assert_eq!(summary.get_f64("q3"), Some(6.0));
///
/// // Non-numeric input is rejected, not coerced
/// assert!(stats.update("7").is_err());
/// assert_eq!(stats.len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    /// Observations in insertion order
    values: Vec<Value>,
    /// Percentile ranks reported by `compute`
    ranks: Vec<i64>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create an empty accumulator with [`DEFAULT_PERCENTILE_RANKS`]
    pub fn new() -> Self {
        Self::with_percentile_ranks(DEFAULT_PERCENTILE_RANKS)
    }

    /// Create an empty accumulator reporting the given percentile ranks
    ///
    /// Ranks are not validated here; an invalid rank makes
    /// [`compute`](Self::compute) fail.
    pub fn with_percentile_ranks(ranks: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: Vec::new(),
            ranks: ranks.into_iter().collect(),
        }
    }

    /// Append an observation
    ///
    /// # Errors
    ///
    /// [`StatsError::TypeKind`] if `value` is not numeric. Nothing is
    /// appended in that case.
    pub fn update<T: IntoValue>(&mut self, value: T) -> Result<(), StatsError> {
        match value.into_value() {
            Ok(value) => {
                self.values.push(value);
                Ok(())
            }
            Err(err) => {
                log::trace!("rejected observation: {}", err);
                Err(err)
            }
        }
    }

    /// Append every observation from `iter`
    ///
    /// Returns the number of observations appended. Stops at the first
    /// non-numeric item; items before it stay appended.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize, StatsError>
    where
        I: IntoIterator,
        I::Item: IntoValue,
    {
        let mut appended = 0;
        for value in iter {
            self.update(value)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Replace the percentile ranks reported by [`compute`](Self::compute)
    ///
    /// Returns the previous ranks so they can be restored. Ranks are not
    /// validated until they are used.
    pub fn set_percentile_ranks(&mut self, ranks: impl IntoIterator<Item = i64>) -> Vec<i64> {
        let previous = core::mem::replace(&mut self.ranks, ranks.into_iter().collect());
        log::debug!(
            "percentile ranks changed from {:?} to {:?}",
            previous,
            self.ranks
        );
        previous
    }

    /// Percentile ranks reported by [`compute`](Self::compute)
    pub fn percentile_ranks(&self) -> &[i64] {
        &self.ranks
    }

    /// Observations in insertion order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Percentile of the dataset by linear interpolation
    ///
    /// Integer ranks are percentages in `[0, 100]`; real ranks are
    /// fractions in `[0.0, 1.0]`. With a single observation that
    /// observation is returned without validating `rank`.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyDataset`] with no observations
    /// - [`StatsError::Range`] if `rank` is outside the range of its kind
    pub fn percentile(&self, rank: impl Into<Rank>) -> Result<f64, StatsError> {
        percentile_sorted(&self.sorted(), rank.into())
    }

    /// Quartile of the dataset by recursive median of halves
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyDataset`] with no observations.
    pub fn quantile(&self, which: Quartile) -> Result<f64, StatsError> {
        quantile_sorted(&self.sorted(), which)
    }

    /// Compute every summary statistic
    ///
    /// Mean, median, quartiles and percentiles are rounded to 3 decimal
    /// places, the standard deviation to 7, ties away from zero. The
    /// interquartile range is the difference of the rounded quartiles, and
    /// the standard deviation is taken around the rounded mean.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyDataset`] with no observations
    /// - [`StatsError::Range`] if a configured percentile rank is invalid
    pub fn compute(&self) -> Result<Summary, StatsError> {
        let (first, rest) = self
            .values
            .split_first()
            .ok_or(StatsError::EmptyDataset)?;

        log::debug!(
            "computing statistics over {} observations",
            self.values.len()
        );

        let mut min = *first;
        let mut max = *first;
        let mut sum = *first;
        for &value in rest {
            // strict comparisons keep the first-seen of equal values, -0.0 == 0.0
            if value.as_f64() < min.as_f64() {
                min = value;
            }
            if value.as_f64() > max.as_f64() {
                max = value;
            }
            sum = sum.add_value(value);
        }

        let count = self.values.len();
        let sorted = self.sorted();

        let mean = math::round_to(sum.as_f64() / count as f64, PLACES);
        let median = math::round_to(percentile_sorted(&sorted, Rank::Percent(50))?, PLACES);
        let q1 = math::round_to(quantile_sorted(&sorted, Quartile::Lower)?, PLACES);
        let q3 = math::round_to(quantile_sorted(&sorted, Quartile::Upper)?, PLACES);

        let acc: f64 = self
            .values
            .iter()
            .map(|v| math::powi(v.as_f64() - mean, 2))
            .sum();
        let stddev = math::round_to(math::sqrt(acc / count as f64), STDDEV_PLACES);

        let mut summary = Summary::new();
        summary.insert("min", min);
        summary.insert("max", max);
        summary.insert("count", Value::Int(count as i64));
        summary.insert("sum", sum);
        summary.insert("mean", mean);
        summary.insert("median", median);
        summary.insert("q1", q1);
        summary.insert("q3", q3);
        summary.insert("iqr", q3 - q1);
        summary.insert("stddev", stddev);

        for &rank in &self.ranks {
            let value = percentile_sorted(&sorted, Rank::Percent(rank))?;
            summary.insert(format!("{}th", rank), math::round_to(value, PLACES));
        }

        Ok(summary)
    }

    fn sorted(&self) -> Vec<f64> {
        let values: Vec<f64> = self.values.iter().map(Value::as_f64).collect();
        sorted_copy(&values)
    }
}
