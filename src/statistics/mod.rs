//! Descriptive statistics over an in-memory dataset
//!
//! [`Statistics`] keeps every observation and computes a [`Summary`] on
//! demand. Nothing is approximated: each query works on a sorted copy of
//! the full dataset.
//!
//! # Example
//!
//! ```
//! use describe::statistics::Statistics;
//!
//! let mut stats = Statistics::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.update(value).unwrap();
//! }
//!
//! let summary = stats.compute().unwrap();
//! println!("{}", summary);
//! ```

mod engine;
mod summary;

pub use engine::{Statistics, DEFAULT_PERCENTILE_RANKS};
pub use summary::Summary;
