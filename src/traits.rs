//! Error types
//!
//! All fallible operations in the crate report failures through
//! [`StatsError`].

/// Rank outside the range its kind allows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Integer rank outside `[0, 100]`
    Percent(i64),
    /// Real rank outside `[0.0, 1.0]`
    Fraction(f64),
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeError::Percent(rank) => {
                write!(f, "integer rank should be between 0 and 100, got {}", rank)
            }
            RangeError::Fraction(rank) => {
                write!(f, "float rank should be between 0.0 and 1.0, got {}", rank)
            }
        }
    }
}

/// Error raised by statistics operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A non-numeric value was offered as an observation
    TypeKind {
        /// Name of the rejected type
        found: &'static str,
    },
    /// The operation needs at least one observation
    EmptyDataset,
    /// Percentile rank is out of range
    Range(RangeError),
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::TypeKind { found } => {
                write!(f, "expected an integer or float observation, found {}", found)
            }
            StatsError::EmptyDataset => write!(f, "there are no values in the dataset"),
            StatsError::Range(err) => write!(f, "rank out of range: {}", err),
        }
    }
}

impl From<RangeError> for StatsError {
    fn from(err: RangeError) -> Self {
        StatsError::Range(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Range(err) => Some(err),
            _ => None,
        }
    }
}
