//! Named statistic results

use crate::value::Value;
use core::ops::Index;
use indexmap::IndexMap;
use xxhash_rust::xxh3::Xxh3Builder;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Snapshot of computed statistics, keyed by name
///
/// Entries keep the order they were computed in. Keys are `min`, `max`,
/// `count`, `sum`, `mean`, `median`, `q1`, `q3`, `iqr`, `stddev`, then one
/// `"{rank}th"` entry per configured percentile rank.
///
/// # Example
///
/// ```
/// use describe::statistics::Statistics;
///
/// let mut stats = Statistics::new();
/// for v in [3, 1, 2] {
///     stats.update(v).unwrap();
/// }
///
/// let summary = stats.compute().unwrap();
/// assert_eq!(summary["count"].as_i64(), Some(3));
/// assert_eq!(summary.get("median").map(|v| v.as_f64()), Some(2.0));
/// assert!(summary.get("mode").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    // xxh3 keeps the map usable without std's RandomState
    entries: IndexMap<String, Value, Xxh3Builder>,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(Xxh3Builder::new()),
        }
    }

    /// Insert a statistic, replacing any previous value under the same key
    ///
    /// A replaced entry keeps its position. Returns the replaced value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a statistic by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a statistic as `f64`
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).map(Value::as_f64)
    }

    /// Check if a statistic is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over statistic names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of statistics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no statistics
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for Summary {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no statistic named {:?}", key),
        }
    }
}

impl IntoIterator for Summary {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl core::fmt::Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.entries, serializer)
    }
}
