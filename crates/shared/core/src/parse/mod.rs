//! Text parsers for scenario input
//!
//! Scenario sentences carry time as quoted text. These parsers turn that
//! text into the domain types the clock operations take: a relative
//! offset ([`parse_duration`]) or an absolute instant ([`parse_timestamp`]).
//! Failures are returned to the caller untouched; nothing here retries or
//! falls back.

mod duration;
mod timestamp;

pub use duration::parse_duration;
pub use timestamp::parse_timestamp;

use thiserror::Error;

/// Errors from the text parsers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
