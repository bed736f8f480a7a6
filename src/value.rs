//! Value types that can be formatted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A value that can be rounded to a fixed-point decimal string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A floating-point number
    Number(f64),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    UInt(u64),
    /// Text holding a numeric literal such as `"12.5"` or `"-3e2"`
    Text(&'a str),
    /// An arbitrary-precision integer (requires `bigint` feature)
    #[cfg(feature = "bigint")]
    BigInt(num_bigint::BigInt),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl<'a> From<u64> for Value<'a> {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::UInt(n as u64)
    }
}

impl<'a> From<usize> for Value<'a> {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

#[cfg(feature = "bigint")]
impl<'a> From<num_bigint::BigInt> for Value<'a> {
    fn from(n: num_bigint::BigInt) -> Self {
        Value::BigInt(n)
    }
}

#[cfg(feature = "bigint")]
impl<'a> From<i128> for Value<'a> {
    fn from(n: i128) -> Self {
        Value::BigInt(num_bigint::BigInt::from(n))
    }
}

#[cfg(feature = "bigint")]
impl<'a> From<u128> for Value<'a> {
    fn from(n: u128) -> Self {
        Value::BigInt(num_bigint::BigInt::from(n))
    }
}

impl<'a> Value<'a> {
    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Text(_) => "text",
            #[cfg(feature = "bigint")]
            Value::BigInt(_) => "bigint",
        }
    }
}

/// The date a pattern is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInput {
    /// The current instant
    #[default]
    Now,
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// An already-built wall-clock date and time, used as-is
    At(NaiveDateTime),
}

impl From<()> for DateInput {
    fn from(_: ()) -> Self {
        DateInput::Now
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::EpochMillis(millis)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::At(dt)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::At(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::At(dt.naive_local())
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Now, Into::into)
    }
}
