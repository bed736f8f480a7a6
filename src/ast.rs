//! AST types for parsed date patterns.

use std::fmt;

/// The pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "yyyy MM dd HH:mm:ss w";

/// Date/time fields that have a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// `yyyy` - Calendar year
    Year4,
    /// `MM` - Month with leading zero (01-12)
    Month2,
    /// `dd` - Day of month with leading zero (01-31)
    Day2,
    /// `HH` - Hour with leading zero (00-23)
    Hour2,
    /// `mm` - Minute with leading zero (00-59)
    Minute2,
    /// `ss` - Second with leading zero (00-59)
    Second2,
    /// `w` - Weekday name
    Weekday,
}

impl DateField {
    /// Every field, in token-table order.
    pub const ALL: [DateField; 7] = [
        DateField::Year4,
        DateField::Month2,
        DateField::Day2,
        DateField::Hour2,
        DateField::Minute2,
        DateField::Second2,
        DateField::Weekday,
    ];

    /// Looks up a matched token in the token table.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "yyyy" => Some(DateField::Year4),
            "MM" => Some(DateField::Month2),
            "dd" => Some(DateField::Day2),
            "HH" => Some(DateField::Hour2),
            "mm" => Some(DateField::Minute2),
            "ss" => Some(DateField::Second2),
            "w" => Some(DateField::Weekday),
            _ => None,
        }
    }

    /// The pattern text of this field.
    pub fn token(&self) -> &'static str {
        match self {
            DateField::Year4 => "yyyy",
            DateField::Month2 => "MM",
            DateField::Day2 => "dd",
            DateField::Hour2 => "HH",
            DateField::Minute2 => "mm",
            DateField::Second2 => "ss",
            DateField::Weekday => "w",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A part of a parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// A field rendered from the date
    Field(DateField),
    /// Text copied to the output
    Literal(String),
    /// The inside of a quoted run
    Quoted(String),
    /// A matched run with no renderer, and its byte offset in the pattern
    Unknown { token: String, position: usize },
}

/// A parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Parse a pattern string. Parsing never fails; unrecognized runs become
    /// `PatternPart::Unknown` and are dealt with when rendering.
    pub fn parse(pattern: &str) -> Self {
        crate::parser::parse(pattern)
    }

    /// Create a pattern from parts directly.
    pub fn from_parts(parts: Vec<PatternPart>) -> Self {
        Self { parts }
    }

    /// The parts of this pattern, in order.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// The fields this pattern renders, in order.
    pub fn fields(&self) -> impl Iterator<Item = DateField> + '_ {
        self.parts.iter().filter_map(|part| match part {
            PatternPart::Field(field) => Some(*field),
            _ => None,
        })
    }

    /// Returns true if any run in the pattern has no renderer.
    pub fn has_unknown_tokens(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PatternPart::Unknown { .. }))
    }

    /// Returns true if the pattern renders any time-of-day field.
    pub fn has_time_fields(&self) -> bool {
        self.fields().any(|f| {
            matches!(
                f,
                DateField::Hour2 | DateField::Minute2 | DateField::Second2
            )
        })
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERN)
    }
}
