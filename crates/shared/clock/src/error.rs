//! Error types for the clock crate

use thiserror::Error;

/// Errors from controllable-clock operations
///
/// Reading the time never fails. Only the relative adjustments can, and
/// only while nothing is scripted: there is no fixed value to adjust.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The clock must be set, frozen or scripted before adding an offset
    #[error("Clock is not set")]
    NotSet,
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
