//! Published-date rendering for article headers.

use crate::domain::errors::DateFormatError;
use chrono::NaiveDateTime;

const API_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_FORMAT: &str = "%B %d at %I:%M %p";

/// Parse the strict `YYYY-MM-DDTHH:MM:SSZ` form used by the search API.
pub fn parse_published(iso: &str) -> Result<NaiveDateTime, DateFormatError> {
    if iso.is_empty() {
        return Err(DateFormatError::Empty);
    }
    NaiveDateTime::parse_from_str(iso, API_FORMAT).map_err(|_| DateFormatError::Malformed {
        input: iso.to_string(),
    })
}

/// Render a timestamp as e.g. "March 04 at 09:15 AM".
///
/// Input that does not parse is returned unchanged.
pub fn format_published(iso: &str) -> String {
    match parse_published(iso) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => iso.to_string(),
    }
}
