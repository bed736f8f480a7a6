//! fmtkit - small formatting utilities
//!
//! The core is a token-based date formatter (`yyyy MM dd HH:mm:ss w`) and a
//! fixed-point decimal formatter with round-half-up semantics. Around it sit
//! query-string helpers, helpers for JSON-like data and, with the `timing`
//! feature, debounce and throttle wrappers.

pub mod ast;
pub mod error;
pub mod object;
pub mod options;
pub mod query;
pub mod value;

#[cfg(feature = "timing")]
pub mod timing;

mod cache;
mod formatter;
mod locale;
pub mod parser;

pub use ast::{DateField, DatePattern, PatternPart, DEFAULT_PATTERN};
pub use error::{FormatError, QueryError, RoundError};
pub use formatter::{
    format, format_now, format_with_options, pad_zero, round, DecimalDigits, FormattedDate,
    MAX_WIDTH,
};
pub use locale::Locale;
pub use options::{DateFormatOptions, TimeBase, UnknownTokenPolicy};
pub use query::{build_url, decode_component, encode_component, parse_query, QueryMap};
pub use value::{DateInput, Value};

#[cfg(feature = "timing")]
pub use error::TimingError;
#[cfg(feature = "timing")]
pub use timing::{Debouncer, Throttle};
