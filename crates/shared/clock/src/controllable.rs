use chrono::{Days, Duration, Months, Utc};
use parking_lot::Mutex;

use kairos_core::Timestamp;
use kairos_ports::Clock;

use crate::error::{ClockError, ClockResult};

/// Scriptable time source for deterministic scenario tests
///
/// Holds a queue of upcoming timestamps behind one exclusive lock. With an
/// empty queue the clock is live and reports real wall-clock time. Once a
/// timestamp is scripted (via [`set`](Self::set), [`freeze`](Self::freeze)
/// or [`next`](Self::next)) the clock is simulated: reads come from the
/// queue instead. While more than one element is queued each read consumes
/// the head, so successive reads walk the script; the final element sticks
/// and is reported indefinitely until the next mutation.
///
/// Every operation takes the same lock, so concurrent callers always observe
/// a fully-applied state and never a half-finished transition.
pub struct ControllableClock {
    /// Upcoming timestamps; the head is the value reported next
    pending: Mutex<Vec<Timestamp>>,
}

impl ControllableClock {
    /// Create a new clock in live mode (nothing scripted)
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Create a clock with timestamps already scripted
    pub fn with_timestamps(timestamps: impl IntoIterator<Item = Timestamp>) -> Self {
        Self {
            pending: Mutex::new(timestamps.into_iter().collect()),
        }
    }

    /// Fix the clock at a time
    ///
    /// Replaces whatever was scripted with this single value, which is then
    /// reported by every read until the next mutation.
    pub fn set(&self, timestamp: Timestamp) {
        *self.pending.lock() = vec![timestamp];
    }

    /// Script timestamps for upcoming reads
    ///
    /// Appends to the queue without disturbing what is already scripted,
    /// including a sticky value left over from an earlier `set`, `freeze`
    /// or `next`. On a live clock this enters simulated mode.
    pub fn next(&self, timestamps: impl IntoIterator<Item = Timestamp>) {
        self.pending.lock().extend(timestamps);
    }

    /// Shift the currently reported timestamp by a relative offset
    ///
    /// Adjusts the queue head only; later scripted values are untouched.
    /// Fails with [`ClockError::NotSet`] while the clock is live, because
    /// shifting real time in place would be meaningless.
    pub fn add(&self, offset: Duration) -> ClockResult<()> {
        let mut pending = self.pending.lock();

        let head = pending.first_mut().ok_or(ClockError::NotSet)?;
        *head += offset;

        Ok(())
    }

    /// Shift the currently reported timestamp by a calendar offset
    ///
    /// Years and months are applied first, with chrono's normalization:
    /// the day-of-month clamps to the target month's last day, so
    /// Jan 31 + 1 month is Feb 28 (or 29). Days are applied afterwards.
    /// Negative components move the clock backwards. Same precondition and
    /// failure as [`add`](Self::add).
    ///
    /// # Panics
    ///
    /// Panics if the shifted timestamp would fall outside the representable
    /// date range (about ±262,000 years), as plain chrono arithmetic does.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> ClockResult<()> {
        let mut pending = self.pending.lock();

        let head = pending.first_mut().ok_or(ClockError::NotSet)?;

        let total_months = i64::from(years) * 12 + i64::from(months);
        // Saturate rather than truncate; an oversized total must stay out of
        // range so the calendar arithmetic rejects it.
        let shifted = if total_months >= 0 {
            *head + Months::new(u32::try_from(total_months).unwrap_or(u32::MAX))
        } else {
            *head - Months::new(u32::try_from(total_months.unsigned_abs()).unwrap_or(u32::MAX))
        };

        *head = if days >= 0 {
            shifted + Days::new(days as u64)
        } else {
            shifted - Days::new(u64::from(days.unsigned_abs()))
        };

        Ok(())
    }

    /// Fix the clock at the real current time
    ///
    /// Each call re-captures wall-clock time, replacing the whole script.
    pub fn freeze(&self) {
        *self.pending.lock() = vec![Utc::now()];
    }

    /// Drop everything scripted, returning the clock to live mode
    ///
    /// Idempotent; harmless on a clock that is already live.
    pub fn unfreeze(&self) {
        self.pending.lock().clear();
    }
}

impl Default for ControllableClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ControllableClock {
    fn now(&self) -> Timestamp {
        let mut pending = self.pending.lock();

        if pending.is_empty() {
            return Utc::now();
        }

        let head = pending[0];

        if pending.len() > 1 {
            pending.remove(0);
        }

        head
    }

    fn name(&self) -> &str {
        "ControllableClock"
    }
}
