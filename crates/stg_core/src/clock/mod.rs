//! Recording clock.
//!
//! A pausable stopwatch built on the anchor-time technique: on every
//! start/resume the anchor is set to `now - elapsed`, so elapsed time is
//! always `now - anchor` while running and frozen while paused. All
//! operations are total functions over in-memory state; there are no
//! error paths.

use std::time::{Duration, Instant};

/// Pausable stopwatch for the recording session.
///
/// `elapsed` only advances while the clock is running. The caller is
/// expected to drive [`Clock::sample`] at some cadence (the GUI uses a
/// 100 ms tick) to keep the stored elapsed value fresh; sampling is
/// idempotent and safe at any rate.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Elapsed active time, updated on sample/pause.
    elapsed: Duration,
    /// Wall-clock anchor, `Some` exactly while running.
    anchor: Option<Instant>,
}

impl Clock {
    /// Create a stopped clock at 00:00.
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            anchor: None,
        }
    }

    /// Whether the clock is currently counting.
    pub fn is_running(&self) -> bool {
        self.anchor.is_some()
    }

    /// Last computed elapsed time.
    ///
    /// While running this is only as fresh as the last `sample()` or
    /// `pause()` call; call `sample()` first for an up-to-date read.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Start or resume counting from the current elapsed value.
    ///
    /// No-op if already running.
    pub fn start(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(Instant::now() - self.elapsed);
        }
    }

    /// Freeze elapsed at its current value and stop counting.
    ///
    /// No-op if already paused.
    pub fn pause(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            self.elapsed = anchor.elapsed();
        }
    }

    /// Single start/pause control: starts when paused, pauses when
    /// running. Returns `true` if the clock is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Recompute elapsed from the anchor. Does nothing while paused.
    ///
    /// Returns the (possibly refreshed) elapsed value.
    pub fn sample(&mut self) -> Duration {
        if let Some(anchor) = self.anchor {
            self.elapsed = anchor.elapsed();
        }
        self.elapsed
    }

    /// Stop counting and set elapsed back to zero.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.anchor = None;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn new_clock_is_stopped_at_zero() {
        let clock = Clock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn start_then_pause_accumulates_elapsed() {
        let mut clock = Clock::new();
        clock.start();
        assert!(clock.is_running());

        sleep(Duration::from_millis(30));
        clock.pause();

        assert!(!clock.is_running());
        let elapsed = clock.elapsed();
        assert!(elapsed >= Duration::from_millis(30));
        assert!(elapsed < Duration::from_secs(5), "elapsed was {elapsed:?}");
    }

    #[test]
    fn resume_preserves_prior_elapsed() {
        let mut clock = Clock::new();
        clock.start();
        sleep(Duration::from_millis(20));
        clock.pause();
        let frozen = clock.elapsed();

        // Paused time must not count.
        sleep(Duration::from_millis(20));
        assert_eq!(clock.elapsed(), frozen);

        clock.start();
        sleep(Duration::from_millis(20));
        clock.pause();
        assert!(clock.elapsed() >= frozen + Duration::from_millis(20));
    }

    #[test]
    fn sample_is_noop_while_paused() {
        let mut clock = Clock::new();
        clock.start();
        sleep(Duration::from_millis(10));
        clock.pause();
        let frozen = clock.elapsed();

        sleep(Duration::from_millis(10));
        assert_eq!(clock.sample(), frozen);
    }

    #[test]
    fn sample_refreshes_while_running() {
        let mut clock = Clock::new();
        clock.start();
        sleep(Duration::from_millis(15));
        let first = clock.sample();
        assert!(first >= Duration::from_millis(15));

        sleep(Duration::from_millis(15));
        assert!(clock.sample() > first);
    }

    #[test]
    fn toggle_alternates_running_state() {
        let mut clock = Clock::new();
        assert!(clock.toggle());
        assert!(clock.is_running());
        assert!(!clock.toggle());
        assert!(!clock.is_running());
    }

    #[test]
    fn reset_zeroes_and_stops() {
        let mut clock = Clock::new();
        clock.start();
        sleep(Duration::from_millis(10));
        clock.reset();

        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);

        // Reset while paused behaves the same.
        clock.start();
        clock.pause();
        clock.reset();
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
