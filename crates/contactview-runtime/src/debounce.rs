use std::time::{Duration, Instant};

/// Quiet period applied to search input before the query is recomputed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// A cancellable scheduled value.
///
/// Each [`arm`](Self::arm) replaces whatever was pending and restarts the
/// quiet period, so a burst of inputs fires once with the last value. Time is
/// passed in by the caller; the event loop polls [`take_due`](Self::take_due)
/// and bounds its wait with [`time_until_due`](Self::time_until_due).
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remaining quiet time, or `None` when nothing is scheduled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    /// Fire the pending value once its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_nothing_fires_before_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(200 * MS);
        debouncer.arm("a", start);

        assert_eq!(debouncer.take_due(start + 199 * MS), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.take_due(start + 200 * MS), Some("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rearming_coalesces_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(200 * MS);

        debouncer.arm("j", start);
        debouncer.arm("jo", start + 150 * MS);
        debouncer.arm("joh", start + 300 * MS);

        // The first deadline has passed but was replaced
        assert_eq!(debouncer.take_due(start + 450 * MS), None);
        assert_eq!(debouncer.take_due(start + 500 * MS), Some("joh"));
        assert_eq!(debouncer.take_due(start + 900 * MS), None);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(200 * MS);
        debouncer.arm(1, start);

        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.take_due(start + 1000 * MS), None);
        assert_eq!(debouncer.time_until_due(start), None);
    }

    #[test]
    fn test_time_until_due_saturates_at_zero() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(200 * MS);
        debouncer.arm((), start);

        assert_eq!(debouncer.time_until_due(start + 50 * MS), Some(150 * MS));
        assert_eq!(debouncer.time_until_due(start + 500 * MS), Some(Duration::ZERO));
    }

    #[test]
    fn test_default_uses_search_delay() {
        let debouncer: Debouncer<String> = Debouncer::default();
        assert_eq!(debouncer.delay(), SEARCH_DEBOUNCE);
    }
}
