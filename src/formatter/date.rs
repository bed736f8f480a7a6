//! Date and time formatting

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc};

use crate::ast::{DateField, DatePattern, PatternPart};
use crate::error::FormatError;
use crate::locale::Locale;
use crate::options::{DateFormatOptions, TimeBase, UnknownTokenPolicy};
use crate::value::DateInput;

/// Text emitted for unrenderable tokens under `UnknownTokenPolicy::Legacy`.
const LEGACY_PLACEHOLDER: &str = "false";

impl DatePattern {
    /// Render any chrono date/time value through this pattern.
    pub fn render<D>(&self, date: &D, opts: &DateFormatOptions) -> Result<String, FormatError>
    where
        D: Datelike + Timelike,
    {
        let mut result = String::new();

        for part in self.parts() {
            match part {
                PatternPart::Field(field) => {
                    result.push_str(&format_field(*field, date, &opts.locale));
                }
                PatternPart::Literal(s) => result.push_str(s),
                PatternPart::Quoted(content) => match opts.unknown_tokens {
                    UnknownTokenPolicy::Legacy => result.push_str(LEGACY_PLACEHOLDER),
                    UnknownTokenPolicy::Reject | UnknownTokenPolicy::Preserve => {
                        result.push_str(content)
                    }
                },
                PatternPart::Unknown { token, position } => match opts.unknown_tokens {
                    UnknownTokenPolicy::Reject => {
                        return Err(FormatError::UnknownToken {
                            token: token.clone(),
                            position: *position,
                        });
                    }
                    UnknownTokenPolicy::Preserve => {
                        tracing::debug!(token = %token, position, "keeping unknown date token");
                        result.push_str(token);
                    }
                    UnknownTokenPolicy::Legacy => {
                        tracing::debug!(token = %token, position, "replacing unknown date token");
                        result.push_str(LEGACY_PLACEHOLDER);
                    }
                },
            }
        }

        Ok(result)
    }
}

/// Format a single date/time field.
fn format_field<D>(field: DateField, date: &D, locale: &Locale) -> String
where
    D: Datelike + Timelike,
{
    match field {
        DateField::Year4 => date.year().to_string(),
        DateField::Month2 => pad_zero(date.month(), 2),
        DateField::Day2 => pad_zero(date.day(), 2),
        DateField::Hour2 => pad_zero(date.hour(), 2),
        DateField::Minute2 => pad_zero(date.minute(), 2),
        DateField::Second2 => pad_zero(date.second(), 2),
        DateField::Weekday => locale
            .day_name(date.weekday().num_days_from_sunday())
            .to_string(),
    }
}

/// Left-pad the text of `value` with `'0'` until it is at least `width` long.
pub fn pad_zero(value: impl ToString, width: usize) -> String {
    let text = value.to_string();
    let missing = width.saturating_sub(text.len());
    let mut padded = "0".repeat(missing);
    padded.push_str(&text);
    padded
}

/// Resolve a date input into the wall-clock value fields are read from.
pub fn resolve(input: DateInput, time_base: TimeBase) -> Result<NaiveDateTime, FormatError> {
    match input {
        DateInput::Now => Ok(match time_base {
            TimeBase::Local => Local::now().naive_local(),
            TimeBase::Utc => Utc::now().naive_utc(),
        }),
        DateInput::EpochMillis(millis) => {
            let instant = DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or(FormatError::TimestampOutOfRange { millis })?;
            Ok(match time_base {
                TimeBase::Local => instant.with_timezone(&Local).naive_local(),
                TimeBase::Utc => instant.naive_utc(),
            })
        }
        DateInput::At(dt) => Ok(dt),
    }
}
