//! Error types for scenario step handling

use std::num::ParseIntError;

use kairos_clock::ClockError;
use kairos_core::ParseError;
use thiserror::Error;

/// Errors reported to the scenario runner when a step cannot run
///
/// Parser and clock failures pass through unchanged, so a scenario author
/// sees the same message the underlying component produced.
#[derive(Error, Debug)]
pub enum StepError {
    /// No registered pattern matched the sentence
    #[error("No step matches sentence: {0}")]
    NoMatch(String),

    /// A quoted argument was not a valid timestamp or duration
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The clock refused the operation
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// A numeric capture did not fit the expected integer type
    #[error("Invalid capture: {0}")]
    Capture(#[from] ParseIntError),
}

pub type StepResult<T> = std::result::Result<T, StepError>;
