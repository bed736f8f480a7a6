//! URL query-string parsing and building.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::QueryError;

/// Parsed query parameters. Keys without `=` map to `None`.
pub type QueryMap = BTreeMap<String, Option<String>>;

/// Characters `encode_component` leaves untouched besides ASCII alphanumerics.
const UNRESERVED: &[u8] = b"-_.!~*'()";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Parse a `?key=value&flag` search string.
///
/// Empty segments are skipped and a later duplicate key replaces an earlier one.
/// Keys and values are percent-decoded.
pub fn parse_query(search: &str) -> Result<QueryMap, QueryError> {
    let body = search.strip_prefix('?').ok_or(QueryError::MissingPrefix)?;

    let mut params = QueryMap::new();
    for segment in body.split('&').filter(|s| !s.is_empty()) {
        match segment.split_once('=') {
            Some((key, value)) => {
                params.insert(decode_component(key)?, Some(decode_component(value)?));
            }
            None => {
                params.insert(decode_component(segment)?, None);
            }
        }
    }
    Ok(params)
}

/// Append parameters to a URL as an encoded query string.
///
/// Without parameters the URL is returned unchanged. A `?` is added when the URL
/// has none, and `&` when it already carries parameters.
pub fn build_url<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut query = String::new();
    for (key, value) in params {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&encode_component(key.as_ref()));
        query.push('=');
        query.push_str(&encode_component(&value.to_string()));
    }

    if query.is_empty() {
        return url.to_string();
    }

    let separator = match url.find('?') {
        None => "?",
        Some(_) if url.ends_with('?') || url.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{url}{separator}{query}")
}

/// Percent-encode text the way `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
    }
    encoded
}

/// Decode every `%XX` escape in `text`.
pub fn decode_component(text: &str) -> Result<String, QueryError> {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|pair| Some((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
                .ok_or(QueryError::MalformedEscape { position: i })?;
            decoded.push(hex);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| QueryError::InvalidUtf8)
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}
