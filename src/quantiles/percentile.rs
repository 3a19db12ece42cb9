//! Percentile ranks by linear interpolation between order statistics

use crate::math;
use crate::traits::{RangeError, StatsError};

/// Percentile rank
///
/// The variant, not the magnitude, decides the valid range: integer ranks
/// are percentages in `[0, 100]`, real ranks are fractions in `[0.0, 1.0]`.
/// A whole-number real such as `50.0` is still a fraction and is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rank {
    /// Integer percentage in `[0, 100]`
    Percent(i64),
    /// Fraction in `[0.0, 1.0]`
    Fraction(f64),
}

impl Rank {
    /// Validate the rank and normalize it to a fraction in `[0.0, 1.0]`
    pub fn to_fraction(self) -> Result<f64, RangeError> {
        match self {
            Rank::Percent(k) if (0..=100).contains(&k) => Ok(k as f64 / 100.0),
            Rank::Percent(k) => Err(RangeError::Percent(k)),
            Rank::Fraction(r) if (0.0..=1.0).contains(&r) => Ok(r),
            Rank::Fraction(r) => Err(RangeError::Fraction(r)),
        }
    }
}

macro_rules! impl_rank_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Rank {
            #[inline]
            fn from(k: $t) -> Self {
                Rank::Percent(k as i64)
            }
        }
    )*};
}

impl_rank_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_rank_from_wide {
    ($($t:ty),*) => {$(
        impl From<$t> for Rank {
            /// Ranks beyond `i64` saturate; they are out of range either way.
            fn from(k: $t) -> Self {
                Rank::Percent(match i64::try_from(k) {
                    Ok(k) => k,
                    Err(_) if k > 0 => i64::MAX,
                    Err(_) => i64::MIN,
                })
            }
        }
    )*};
}

impl_rank_from_wide!(u64, usize, isize, i128, u128);

impl From<f32> for Rank {
    #[inline]
    fn from(r: f32) -> Self {
        Rank::Fraction(r as f64)
    }
}

impl From<f64> for Rank {
    #[inline]
    fn from(r: f64) -> Self {
        Rank::Fraction(r)
    }
}

/// Percentile of ascending-sorted data
///
/// Interpolates linearly between the two order statistics bracketing
/// position `r * (n - 1)`. A position landing exactly on an index returns
/// that element, so rank 100 yields the maximum.
///
/// A single element is returned as-is without validating `rank`.
///
/// # Errors
///
/// - [`StatsError::EmptyDataset`] if `sorted` is empty
/// - [`StatsError::Range`] if `rank` is outside the range of its kind
///
/// # Example
///
/// ```
/// use describe::quantiles::{percentile_sorted, Rank};
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_sorted(&sorted, Rank::Percent(50)).unwrap(), 2.5);
/// assert_eq!(percentile_sorted(&sorted, Rank::Fraction(1.0)).unwrap(), 4.0);
/// ```
pub fn percentile_sorted(sorted: &[f64], rank: Rank) -> Result<f64, StatsError> {
    match sorted {
        [] => return Err(StatsError::EmptyDataset),
        [only] => return Ok(*only),
        _ => {}
    }

    let r = rank.to_fraction()?;

    let x = r * (sorted.len() - 1) as f64;
    let lo = math::floor(x) as usize;
    let frac = x - lo as f64;

    if frac == 0.0 {
        return Ok(sorted[lo]);
    }
    Ok(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}

/// Percentile of unsorted data
///
/// Sorts a copy of `values` and delegates to [`percentile_sorted`].
pub fn percentile(values: &[f64], rank: impl Into<Rank>) -> Result<f64, StatsError> {
    let rank = rank.into();
    if values.len() <= 1 {
        return percentile_sorted(values, rank);
    }
    let sorted = super::sorted_copy(values);
    percentile_sorted(&sorted, rank)
}
