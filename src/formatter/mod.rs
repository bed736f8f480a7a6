//! Date and decimal formatting engines

mod date;
mod decimal;

pub use date::{pad_zero, resolve};
pub use decimal::{round, DecimalDigits, MAX_WIDTH};

use std::fmt;

use crate::ast::DEFAULT_PATTERN;
use crate::cache;
use crate::error::FormatError;
use crate::options::DateFormatOptions;
use crate::value::DateInput;

/// The result of formatting a date: a record with a single `date` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDate {
    pub date: String,
}

impl FormattedDate {
    /// Consumes the record and returns the formatted text.
    pub fn into_string(self) -> String {
        self.date
    }
}

impl fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date)
    }
}

impl AsRef<str> for FormattedDate {
    fn as_ref(&self) -> &str {
        &self.date
    }
}

/// Format a date with default options.
///
/// `date` accepts `()` for now, an `i64` of epoch milliseconds, or a chrono
/// date/time. `None` for `pattern` means `"yyyy MM dd HH:mm:ss w"`.
///
/// ```
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().and_hms_opt(9, 5, 3).unwrap();
/// assert_eq!(fmtkit::format(dt, Some("yyyy-MM-dd")).unwrap().date, "2023-01-15");
/// ```
pub fn format(
    date: impl Into<DateInput>,
    pattern: Option<&str>,
) -> Result<FormattedDate, FormatError> {
    format_with_options(date, pattern, &DateFormatOptions::default())
}

/// Format the current instant with the default pattern and options.
pub fn format_now() -> Result<FormattedDate, FormatError> {
    format(DateInput::Now, None)
}

/// Format a date with explicit options.
pub fn format_with_options(
    date: impl Into<DateInput>,
    pattern: Option<&str>,
    opts: &DateFormatOptions,
) -> Result<FormattedDate, FormatError> {
    let subject = resolve(date.into(), opts.time_base)?;
    let parsed = cache::get_or_parse(pattern.unwrap_or(DEFAULT_PATTERN));
    let date = parsed.render(&subject, opts)?;
    Ok(FormattedDate { date })
}
