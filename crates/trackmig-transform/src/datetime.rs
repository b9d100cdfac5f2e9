//! Source-tracker timestamp parsing.
//!
//! The source export writes timestamps like `11/Mar/25 1:31 PM`: day,
//! abbreviated month, two-digit year, 12-hour clock. The target expects an
//! ISO 8601 combined date and time without an offset.

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::warn;

/// Only accepted source layout.
pub const SOURCE_DATE_FORMAT: &str = "%d/%b/%y %I:%M %p";

/// Output layout, e.g. `2025-03-11T13:31:00`.
pub const TARGET_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A non-blank date cell that does not match [`SOURCE_DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}' (expected format {expected})", expected = SOURCE_DATE_FORMAT)]
pub struct DateParseError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parses a source timestamp. Blank input is `Ok(None)`.
///
/// # Errors
///
/// Returns [`DateParseError`] when the text is not in the source layout.
pub fn parse_source_date(value: &str) -> Result<Option<NaiveDateTime>, DateParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(trimmed, SOURCE_DATE_FORMAT)
        .map(Some)
        .map_err(|source| DateParseError {
            value: value.to_string(),
            source,
        })
}

/// Formats a parsed timestamp in the target layout.
pub fn format_target_date(value: &NaiveDateTime) -> String {
    value.format(TARGET_DATE_FORMAT).to_string()
}

/// Converts a source timestamp to the target layout.
///
/// Blank input gives an empty string. Unparseable input is logged and also
/// gives an empty string; it is never an error.
pub fn normalize_date(value: &str) -> String {
    match parse_source_date(value) {
        Ok(Some(parsed)) => format_target_date(&parsed),
        Ok(None) => String::new(),
        Err(error) => {
            warn!(value = %value, %error, "invalid date format");
            String::new()
        }
    }
}
