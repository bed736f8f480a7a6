//! Fixed-point decimal formatting.
//!
//! Values are turned into their decimal text first; all rounding happens on
//! the digit strings.

use crate::error::RoundError;
use crate::value::Value;

/// Exponents beyond this magnitude are rejected instead of being expanded.
const MAX_EXPONENT: i64 = 4096;

/// Largest number of fraction digits `to_fixed` will render.
pub const MAX_WIDTH: usize = 4096;

/// A decimal number split into its sign, integer digits and fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDigits {
    /// Whether the text carried a leading `-`.
    pub negative: bool,
    /// Integer digits, never empty.
    pub integer: String,
    /// Fraction digits, possibly empty.
    pub fraction: String,
}

impl DecimalDigits {
    /// Parse a numeric literal: `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?`.
    ///
    /// Surrounding ASCII whitespace is ignored and the mantissa needs at least
    /// one digit. Without an exponent the integer digits are kept as written.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim_matches(|c: char| c.is_ascii_whitespace());
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match body.find(&['e', 'E'][..]) {
            Some(i) => (&body[..i], Some(&body[i + 1..])),
            None => (body, None),
        };
        let (integer, fraction) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        match exponent {
            None => Some(Self {
                negative,
                integer: if integer.is_empty() {
                    "0".to_string()
                } else {
                    integer.to_string()
                },
                fraction: fraction.to_string(),
            }),
            Some(exp) => {
                let exp = parse_exponent(exp)?;
                Some(Self::shifted(negative, integer, fraction, exp))
            }
        }
    }

    /// Build digits from a mantissa whose decimal point moves `exp` places right.
    fn shifted(negative: bool, integer: &str, fraction: &str, exp: i64) -> Self {
        let digits = format!("{integer}{fraction}");
        let point = integer.len() as i64 + exp;

        let (int_digits, frac_digits) = if point <= 0 {
            let zeros = "0".repeat(point.unsigned_abs() as usize);
            (String::new(), format!("{zeros}{digits}"))
        } else if point as usize >= digits.len() {
            let zeros = "0".repeat(point as usize - digits.len());
            (format!("{digits}{zeros}"), String::new())
        } else {
            let (i, f) = digits.split_at(point as usize);
            (i.to_string(), f.to_string())
        };

        let trimmed = int_digits.trim_start_matches('0');
        Self {
            negative,
            integer: if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            },
            fraction: frac_digits,
        }
    }

    /// Convert a value into its decimal digits.
    pub fn from_value(value: &Value<'_>) -> Result<Self, RoundError> {
        let text = match value {
            Value::Number(n) if !n.is_finite() => {
                return Err(RoundError::NonFinite { value: *n });
            }
            Value::Number(n) if *n == 0.0 => "0".to_string(),
            Value::Number(n) => n.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Text(s) => s.to_string(),
            #[cfg(feature = "bigint")]
            Value::BigInt(n) => n.to_string(),
        };

        Self::parse(&text).ok_or_else(|| {
            tracing::debug!(input = %text, kind = value.type_name(), "rejecting non-numeric value");
            RoundError::NotNumeric { input: text }
        })
    }

    /// Round the fraction to `width` digits, half away from zero.
    ///
    /// Fractions already at most `width` long are returned unchanged. A carry
    /// out of the fraction propagates into the integer digits.
    pub fn round_half_up(&self, width: usize) -> Self {
        if self.fraction.len() <= width {
            return self.clone();
        }

        let round_up = self.fraction.as_bytes()[width] >= b'5';
        let mut kept = format!("{}{}", self.integer, &self.fraction[..width]);
        if round_up {
            kept = increment(&kept);
        }

        let (integer, fraction) = kept.split_at(kept.len() - width);
        Self {
            negative: self.negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    /// Render with exactly `width` fraction digits after a single `.`.
    pub fn to_fixed(&self, width: usize) -> Result<String, RoundError> {
        if width > MAX_WIDTH {
            return Err(RoundError::WidthTooLarge {
                width,
                max: MAX_WIDTH,
            });
        }
        let rounded = self.round_half_up(width);
        let sign = if rounded.negative { "-" } else { "" };
        Ok(format!(
            "{sign}{}.{:0<width$}",
            rounded.integer,
            rounded.fraction,
            width = width
        ))
    }
}

/// Parse an exponent: an optional sign and at least one digit.
fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let exp: i64 = text.parse().ok()?;
    (exp.abs() <= MAX_EXPONENT).then_some(exp)
}

/// Add one to a string of ASCII digits.
fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return bytes.into_iter().map(char::from).collect();
        }
    }
    let mut carried = String::with_capacity(bytes.len() + 1);
    carried.push('1');
    carried.extend(bytes.into_iter().map(char::from));
    carried
}

/// Round a value to a fixed-point string with exactly `width` fraction digits.
///
/// ```
/// assert_eq!(fmtkit::round(12, 2).unwrap(), "12.00");
/// assert_eq!(fmtkit::round(12.546, 2).unwrap(), "12.55");
/// assert!(fmtkit::round("abc", 2).is_err());
/// ```
pub fn round<'a>(value: impl Into<Value<'a>>, width: usize) -> Result<String, RoundError> {
    DecimalDigits::from_value(&value.into())?.to_fixed(width)
}
