//! Kairos Ports
//!
//! Port definitions (traits) for the Kairos scenario clock.
//! These define the boundary between consumers of time and its sources.

mod clock;

pub use clock::Clock;
