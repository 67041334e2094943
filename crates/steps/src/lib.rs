//! Kairos Scenario Steps
//!
//! Plain-text sentence bindings for the Kairos controllable clock. A scenario
//! runner feeds each sentence to [`StepRegistry::dispatch`]; the bindings
//! script, shift, freeze and release one shared clock.
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use kairos_clock::{Clock, ControllableClock};
//! use kairos_steps::{ClockSteps, StepRegistry};
//!
//! let steps = ClockSteps::new(Arc::new(ControllableClock::new()));
//! let mut registry = StepRegistry::new();
//! steps.register(&mut registry);
//!
//! registry.dispatch(r#"now is "2023-05-01T10:00:00Z""#)?;
//! registry.dispatch("add 1h30m to the clock")?;
//!
//! let clock = steps.clock();
//! assert_eq!(clock.now().to_rfc3339(), "2023-05-01T11:30:00+00:00");
//!
//! // End of scenario: the cleanup hook returns the clock to live mode.
//! registry.end_scenario();
//! ```

pub mod clock_steps;
pub mod error;
pub mod registry;

// Re-export commonly used types at crate root
pub use clock_steps::ClockSteps;
pub use error::{StepError, StepResult};
pub use registry::StepRegistry;
