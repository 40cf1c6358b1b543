// SPDX-License-Identifier: MPL-2.0
//! Cosmetic time-based transitions.
//!
//! A [`Transition`] only reports how far along it is. Navigation state never
//! waits on it, and starting a new transition simply replaces the old one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Ease-out cubic progress in `[0, 1]`: fast start, gentle landing.
    #[must_use]
    pub fn eased(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        1.0 - (1.0 - t).powi(3)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn progress_runs_from_zero_to_one() {
        let t0 = Instant::now();
        let transition = Transition::start(t0, MS_100);

        assert_eq!(transition.progress(t0), 0.0);
        assert!((transition.progress(t0 + Duration::from_millis(50)) - 0.5).abs() < 1e-3);
        assert_eq!(transition.progress(t0 + MS_100), 1.0);
        assert_eq!(transition.progress(t0 + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn time_before_start_reads_as_zero() {
        let t0 = Instant::now();
        let transition = Transition::start(t0 + MS_100, MS_100);
        assert_eq!(transition.progress(t0), 0.0);
    }

    #[test]
    fn eased_progress_leads_linear() {
        let t0 = Instant::now();
        let transition = Transition::start(t0, MS_100);
        let mid = t0 + Duration::from_millis(30);
        assert!(transition.eased(mid) > transition.progress(mid));
        assert_eq!(transition.eased(t0 + MS_100), 1.0);
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let t0 = Instant::now();
        let transition = Transition::start(t0, Duration::ZERO);
        assert!(transition.is_finished(t0));
    }
}
