use kairos_core::Timestamp;

/// Port for time abstraction
///
/// Anything that needs "a source of now" depends on this trait instead of a
/// concrete clock, so the same code path runs against:
/// - real system time in production
/// - scripted timestamps in deterministic scenario tests
///
/// Implementations must be shareable across threads; reading the time never
/// fails and never blocks beyond brief lock contention.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
