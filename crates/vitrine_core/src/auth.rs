//! Simulated biometric authentication timer
//!
//! The banking demo pretends to run a fingerprint scan: a fixed-duration
//! delay that then moves the screen forward. Instead of an uncancellable
//! sleep, this is an explicit deadline the caller polls from its tick loop.
//! The outcome is declared up front so a denial path exists even though the
//! demo only ever starts approving scans.

use std::time::{Duration, Instant};

/// How a finished scan resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Approved,
    Denied,
}

/// A one-shot, cancellable timer.
///
/// Pure with respect to the `Instant` passed to [`AuthTimer::poll`], so tests
/// never have to sleep.
#[derive(Debug, Clone, Copy)]
pub struct AuthTimer {
    deadline: Instant,
    outcome: AuthOutcome,
    resolved: bool,
}

impl AuthTimer {
    /// Start a timer that resolves to `outcome` after `duration`.
    pub fn start(duration: Duration, outcome: AuthOutcome) -> Self {
        Self {
            deadline: Instant::now() + duration,
            outcome,
            resolved: false,
        }
    }

    #[cfg(test)]
    fn with_deadline(deadline: Instant, outcome: AuthOutcome) -> Self {
        Self {
            deadline,
            outcome,
            resolved: false,
        }
    }

    /// Resolve the timer if its deadline has passed.
    ///
    /// Returns the declared outcome exactly once; later polls return `None`.
    pub fn poll(&mut self, now: Instant) -> Option<AuthOutcome> {
        if self.resolved || now < self.deadline {
            return None;
        }
        self.resolved = true;
        Some(self.outcome)
    }

    /// Fraction of the wait already elapsed, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        let remaining = self.deadline.saturating_duration_since(now);
        1.0 - (remaining.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_only_after_deadline() {
        let start = Instant::now();
        let mut timer = AuthTimer::with_deadline(start + Duration::from_secs(2), AuthOutcome::Approved);

        assert_eq!(timer.poll(start), None);
        assert_eq!(timer.poll(start + Duration::from_millis(1999)), None);
        assert_eq!(
            timer.poll(start + Duration::from_secs(2)),
            Some(AuthOutcome::Approved)
        );
    }

    #[test]
    fn resolves_at_most_once() {
        let start = Instant::now();
        let mut timer = AuthTimer::with_deadline(start, AuthOutcome::Approved);

        assert_eq!(timer.poll(start), Some(AuthOutcome::Approved));
        assert_eq!(timer.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn carries_declared_outcome() {
        let start = Instant::now();
        let mut timer = AuthTimer::with_deadline(start, AuthOutcome::Denied);

        assert_eq!(timer.poll(start), Some(AuthOutcome::Denied));
    }

    #[test]
    fn progress_runs_zero_to_one() {
        let duration = Duration::from_secs(2);
        let start = Instant::now();
        let timer = AuthTimer::with_deadline(start + duration, AuthOutcome::Approved);

        assert!(timer.progress(start, duration) < 0.01);
        let halfway = timer.progress(start + Duration::from_secs(1), duration);
        assert!((halfway - 0.5).abs() < 0.01, "halfway progress was {halfway}");
        assert_eq!(timer.progress(start + duration, duration), 1.0);
    }
}
