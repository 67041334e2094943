//! Kairos Core Domain
//!
//! Pure domain types and text parsers for the Kairos scenario clock.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod parse;
pub mod values;

// Re-export commonly used types at crate root
pub use parse::{ParseError, ParseResult, parse_duration, parse_timestamp};
pub use values::Timestamp;
