use chrono::Duration;

use crate::parse::{ParseError, ParseResult};

/// Parse a relative offset from text
///
/// The unit grammar is humantime's (`"2h"`, `"1h 30m"`, `"90s"`, `"300ms"`).
/// A leading `-` flips the offset so scripted adjustments can move the clock
/// backwards; an explicit `+` is accepted and ignored.
pub fn parse_duration(text: &str) -> ParseResult<Duration> {
    let trimmed = text.trim();

    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let unsigned = humantime::parse_duration(body)
        .map_err(|e| ParseError::InvalidDuration(format!("{}: {}", text, e)))?;

    // Lossy beyond i64 nanoseconds, which chrono cannot represent anyway.
    let offset = Duration::from_std(unsigned)
        .map_err(|_| ParseError::InvalidDuration(format!("{}: out of range", text)))?;

    Ok(if negative { -offset } else { offset })
}
