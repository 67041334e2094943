use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::parse::{ParseError, ParseResult};
use crate::values::Timestamp;

/// Naive layouts tried after RFC 3339, read as UTC
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an absolute instant from text
///
/// RFC 3339 is tried first, so an explicit offset wins and is normalized to
/// UTC. Offset-less layouts (`2023-05-01T12:00:00`, `2023-05-01 12:00:00`,
/// `2023-05-01 12:00`, bare `2023-05-01`) are read as UTC; a bare date means
/// midnight.
pub fn parse_timestamp(text: &str) -> ParseResult<Timestamp> {
    let trimmed = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ParseError::InvalidTimestamp(trimmed.to_string()))
}
