//! Error types for formatting, rounding and query-string handling.

use thiserror::Error;

/// Errors that can occur when rendering a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown token '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },

    #[error("timestamp out of range: {millis} ms since epoch")]
    TimestampOutOfRange { millis: i64 },
}

/// Errors that can occur when rounding a value to a fixed-point string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    #[error("not a number: '{input}'")]
    NotNumeric { input: String },

    #[error("non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("width {width} exceeds the maximum of {max} fraction digits")]
    WidthTooLarge { width: usize, max: usize },
}

/// Errors that can occur when parsing a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query string must start with '?'")]
    MissingPrefix,

    #[error("malformed percent escape at position {position}")]
    MalformedEscape { position: usize },

    #[error("percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Errors raised by the debounce and throttle wrappers.
#[cfg(feature = "timing")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimingError {
    #[error("no tokio runtime available to schedule the call")]
    NoRuntime,
}
