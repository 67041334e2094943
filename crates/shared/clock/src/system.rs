use chrono::Utc;
use kairos_core::Timestamp;
use kairos_ports::Clock;

/// Real system clock for production wiring
///
/// Reports wall-clock time straight from the operating system. Consumers
/// built against the [`Clock`] port get this in production and a
/// [`crate::ControllableClock`] in scenario tests, with no code change.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let clock = SystemClock::new();

        let before = Utc::now();
        let reported = clock.now();
        let after = Utc::now();

        assert!(reported >= before);
        assert!(reported <= after);
    }

    #[test]
    fn test_system_clock_never_stalls() {
        let clock = SystemClock::new();

        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = clock.now();

        assert!(second > first);
    }

    #[test]
    fn test_system_clock_name() {
        assert_eq!(SystemClock::default().name(), "SystemClock");
    }
}
