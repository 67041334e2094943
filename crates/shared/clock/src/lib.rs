//! Kairos Clock Infrastructure
//!
//! Provides time sources for production and scenario testing:
//!
//! ## Modes
//!
//! ```text
//!              set / freeze / next
//!  Live ────────────────────────────▶ Simulated
//!  (queue empty,                      (queue non-empty,
//!   now() = wall clock)               now() = queue head)
//!       ◀────────────────────────────
//!              unfreeze
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use chrono::Duration;
//! use kairos_clock::{Clock, ControllableClock};
//!
//! let clock = Arc::new(ControllableClock::new());
//!
//! // Pin time for a scenario
//! clock.set(start);
//! clock.add(Duration::hours(2))?;       // shift the pinned value
//! clock.next([later, even_later]);      // script the next two reads
//!
//! // Consumers only see the abstract capability
//! let source: Arc<dyn Clock> = clock.clone();
//! let reported = source.now();
//!
//! // Back to wall-clock time
//! clock.unfreeze();
//! ```

mod controllable;
mod error;
mod system;

pub use controllable::ControllableClock;
pub use error::{ClockError, ClockResult};
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use kairos_ports::Clock;
