//! Numeric observations
//!
//! Observations are either integers or reals. [`Value`] keeps that
//! distinction so that extrema and sums over integer data stay integral,
//! while every derived statistic is computed in `f64`.

use crate::traits::StatsError;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// A single numeric observation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Integral observation
    Int(i64),
    /// Real-valued observation
    Float(f64),
}

impl Value {
    /// Value as `f64`
    ///
    /// Integers beyond ±2^53 lose precision.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    /// Integral payload, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Float(_) => None,
        }
    }

    /// Sum that stays integral while both sides are integers and it fits
    pub(crate) fn add_value(self, other: Self) -> Self {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => match a.checked_add(b) {
                Some(sum) => Value::Int(sum),
                None => Value::Float(a as f64 + b as f64),
            },
            (a, b) => Value::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<Value> for f64 {
    fn from(value: Value) -> Self {
        value.as_f64()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Value::Int(v) => serializer.serialize_i64(v),
            Value::Float(v) => serializer.serialize_f64(v),
        }
    }
}

/// Conversion into an observation, checked at insertion time
///
/// Numeric types convert; anything else is rejected with
/// [`StatsError::TypeKind`]. No parsing or other coercion is attempted.
pub trait IntoValue {
    /// Convert into a [`Value`] or report the rejected type
    fn into_value(self) -> Result<Value, StatsError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Result<Value, StatsError> {
        Ok(self)
    }
}

macro_rules! impl_into_value {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            #[inline]
            fn into_value(self) -> Result<Value, StatsError> {
                Ok(Value::from(self))
            }
        }

        impl IntoValue for &$t {
            #[inline]
            fn into_value(self) -> Result<Value, StatsError> {
                Ok(Value::from(*self))
            }
        }
    )*};
}

impl_into_value!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

macro_rules! impl_into_value_wide {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            /// Values that do not fit `i64` are stored as reals.
            fn into_value(self) -> Result<Value, StatsError> {
                Ok(match i64::try_from(self) {
                    Ok(v) => Value::Int(v),
                    Err(_) => Value::Float(self as f64),
                })
            }
        }
    )*};
}

impl_into_value_wide!(u64, usize, isize, i128, u128);

macro_rules! impl_reject {
    ($($t:ty => $name:expr),*) => {$(
        impl IntoValue for $t {
            fn into_value(self) -> Result<Value, StatsError> {
                Err(StatsError::TypeKind { found: $name })
            }
        }
    )*};
}

impl_reject!(
    &str => "&str",
    String => "String",
    char => "char",
    bool => "bool",
    () => "()"
);

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Result<Value, StatsError> {
        match self {
            Some(v) => v.into_value(),
            None => Err(StatsError::TypeKind { found: "None" }),
        }
    }
}
