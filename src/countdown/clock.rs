//! Countdown time bookkeeping
//!
//! `TimerClock` knows nothing about rendering or scheduling. Every query and
//! mutation takes the current instant, in milliseconds on the caller's
//! monotonic time line, so it can be driven by a real or a fake clock.

use tracing::debug;

use super::duration::{Count, TimerDuration, UNIT_MS};

/// How `add_units` changes the countdown length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddPolicy {
    /// New length is the remaining time plus the delta; the countdown restarts.
    Restart,
    /// New length is the configured length plus the delta; progress is kept.
    Accumulate,
}

/// Temporal state of one countdown.
#[derive(Debug, Clone)]
pub struct TimerClock {
    duration: TimerDuration,
    /// Instant the current run began, `None` before the first start.
    started_at: Option<i64>,
    /// Elapsed time captured at the moment of pausing.
    paused_elapsed: Option<i64>,
}

impl TimerClock {
    pub fn new(duration: TimerDuration) -> Self {
        Self {
            duration,
            started_at: None,
            paused_elapsed: None,
        }
    }

    pub fn duration(&self) -> TimerDuration {
        self.duration
    }

    pub fn started_at(&self) -> Option<i64> {
        self.started_at
    }

    pub fn paused_elapsed(&self) -> Option<i64> {
        self.paused_elapsed
    }

    /// The paused snapshot is the sole source of truth for "paused".
    pub fn is_paused(&self) -> bool {
        self.paused_elapsed.is_some()
    }

    /// Begins a fresh run at `now`, discarding any paused snapshot.
    pub fn restart(&mut self, now: i64) {
        self.started_at = Some(now);
        self.paused_elapsed = None;
    }

    /// Captures the elapsed time at `now`.
    pub fn pause(&mut self, now: i64) {
        let elapsed = self.elapsed_ms(now);
        self.paused_elapsed = Some(elapsed);
        debug!("Clock paused after {}ms", elapsed);
    }

    /// Re-synthesizes the start instant so elapsed time continues from the
    /// paused snapshot. Returns false when not paused.
    pub fn resume(&mut self, now: i64) -> bool {
        match self.paused_elapsed.take() {
            Some(elapsed) => {
                self.started_at = Some(now - elapsed);
                debug!("Clock resumed with {}ms already elapsed", elapsed);
                true
            }
            None => false,
        }
    }

    /// Elapsed milliseconds; frozen while paused, zero before the first start.
    pub fn elapsed_ms(&self, now: i64) -> i64 {
        if let Some(elapsed) = self.paused_elapsed {
            return elapsed;
        }
        self.started_at.map_or(0, |started| now - started)
    }

    /// Remaining milliseconds, `None` when unbounded.
    pub fn remaining_ms(&self, now: i64) -> Option<i64> {
        self.duration.millis().map(|ms| ms - self.elapsed_ms(now))
    }

    /// Elapsed whole units, rounded half up.
    pub fn elapsed_units(&self, now: i64) -> i64 {
        (self.elapsed_ms(now) + UNIT_MS / 2).div_euclid(UNIT_MS)
    }

    /// Configured units minus rounded elapsed units. Negative transiently
    /// on the last tick before completion.
    pub fn remaining_units(&self, now: i64) -> Count {
        self.duration.units().minus(self.elapsed_units(now))
    }

    /// Gives back `units` of remaining time without touching the sweep's
    /// progress, unless that would exceed the configured length.
    ///
    /// Returns whether the extension was applied.
    pub fn extend(&mut self, now: i64, units: i64) -> bool {
        if units <= 0 || self.started_at.is_none() {
            debug!("Ignoring extension of {} units", units);
            return false;
        }

        let (configured, remaining) = match (self.duration.units(), self.remaining_units(now)) {
            (Count::Finite(configured), Count::Finite(remaining)) => (configured, remaining),
            _ => {
                debug!("Ignoring extension of an unbounded countdown");
                return false;
            }
        };

        if remaining.saturating_add(units) > configured {
            debug!(
                "Ignoring extension of {} units: {} remaining of {}",
                units, remaining, configured
            );
            return false;
        }

        // Elapsed time never drops below zero, so remaining stays within the
        // configured length even when the rounded check let a partial unit through.
        let shift = units.saturating_mul(UNIT_MS);
        match self.paused_elapsed.as_mut() {
            Some(elapsed) => *elapsed = elapsed.saturating_sub(shift).max(0),
            None => {
                if let Some(started) = self.started_at.as_mut() {
                    *started = started.saturating_add(shift).min(now);
                }
            }
        }
        debug!("Extended countdown by {} units", units);
        true
    }

    /// Lengthens the countdown by `units` according to `policy`.
    ///
    /// Under `Restart` only the length changes here; the caller restarts the
    /// run. Returns whether the length changed.
    pub fn add_units(&mut self, now: i64, units: i64, policy: AddPolicy) -> bool {
        if units <= 0 {
            debug!("Ignoring addition of {} units", units);
            return false;
        }

        let new_duration = match (policy, self.duration) {
            (_, TimerDuration::Unbounded) => {
                debug!("Ignoring addition to an unbounded countdown");
                return false;
            }
            (AddPolicy::Restart, _) => {
                let remaining = self.remaining_units(now).finite().unwrap_or(0).max(0);
                TimerDuration::from_units(remaining.saturating_add(units))
            }
            (AddPolicy::Accumulate, TimerDuration::Bounded(ms)) => {
                TimerDuration::from_millis(ms.saturating_add(units.saturating_mul(UNIT_MS)))
            }
        };

        debug!("Countdown length {:?} -> {:?}", self.duration, new_duration);
        self.duration = new_duration;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(duration_ms: i64) -> TimerClock {
        let mut clock = TimerClock::new(TimerDuration::from_millis(duration_ms));
        clock.restart(0);
        clock
    }

    #[test]
    fn elapsed_and_remaining_units() {
        let clock = running(10_000);
        assert_eq!(clock.elapsed_units(3_000), 3);
        assert_eq!(clock.remaining_units(3_000), Count::Finite(7));
        assert_eq!(clock.remaining_ms(3_000), Some(7_000));
    }

    #[test]
    fn elapsed_units_round_half_up() {
        let clock = running(10_000);
        assert_eq!(clock.elapsed_units(1_499), 1);
        assert_eq!(clock.elapsed_units(1_500), 2);
    }

    #[test]
    fn elapsed_plus_remaining_is_configured() {
        let clock = running(10_000);
        for now in (0..=10_000).step_by(250) {
            let remaining = clock.remaining_units(now).finite().unwrap();
            assert_eq!(clock.elapsed_units(now) + remaining, 10);
        }
    }

    #[test]
    fn never_started_has_no_elapsed_time() {
        let clock = TimerClock::new(TimerDuration::from_units(5));
        assert_eq!(clock.elapsed_ms(42_000), 0);
        assert_eq!(clock.remaining_units(42_000), Count::Finite(5));
    }

    #[test]
    fn pause_freezes_elapsed_and_resume_continues() {
        let mut clock = running(10_000);
        clock.pause(2_000);
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed_ms(9_000), 2_000);

        assert!(clock.resume(9_000));
        assert!(!clock.is_paused());
        assert_eq!(clock.started_at(), Some(7_000));
        assert_eq!(clock.elapsed_ms(10_000), 3_000);
    }

    #[test]
    fn resume_without_pause_is_ignored() {
        let mut clock = running(10_000);
        assert!(!clock.resume(5_000));
        assert_eq!(clock.started_at(), Some(0));
    }

    #[test]
    fn restart_discards_pause() {
        let mut clock = running(10_000);
        clock.pause(4_000);
        clock.restart(6_000);
        assert!(!clock.is_paused());
        assert_eq!(clock.elapsed_ms(6_000), 0);
    }

    #[test]
    fn extend_gives_back_time() {
        let mut clock = running(10_000);
        assert!(clock.extend(6_000, 2));
        assert_eq!(clock.remaining_units(6_000), Count::Finite(6));
        assert_eq!(clock.elapsed_units(6_000), 4);
    }

    #[test]
    fn extend_beyond_configured_is_ignored() {
        let mut clock = running(10_000);
        assert!(!clock.extend(3_000, 4));
        assert_eq!(clock.remaining_units(3_000), Count::Finite(7));
        assert!(clock.extend(3_000, 3));
        assert_eq!(clock.remaining_units(3_000), Count::Finite(10));
    }

    #[test]
    fn extend_while_paused_shrinks_snapshot() {
        let mut clock = running(10_000);
        clock.pause(5_000);
        assert!(clock.extend(8_000, 2));
        assert_eq!(clock.paused_elapsed(), Some(3_000));
    }

    #[test]
    fn extend_after_a_partial_unit_never_exceeds_configured() {
        let mut clock = running(10_000);
        assert!(clock.extend(500, 1));
        assert_eq!(clock.elapsed_ms(500), 0);
        assert_eq!(clock.remaining_ms(500), Some(10_000));
        assert_eq!(clock.remaining_units(500), Count::Finite(10));

        let mut paused = running(10_000);
        paused.pause(700);
        assert!(paused.extend(900, 1));
        assert_eq!(paused.paused_elapsed(), Some(0));
        assert_eq!(paused.remaining_ms(900), Some(10_000));
    }

    #[test]
    fn extend_ignores_non_positive_and_unbounded() {
        let mut clock = running(10_000);
        assert!(!clock.extend(5_000, 0));
        assert!(!clock.extend(5_000, -2));

        let mut unbounded = TimerClock::new(TimerDuration::Unbounded);
        unbounded.restart(0);
        assert!(!unbounded.extend(5_000, 1));
    }

    #[test]
    fn add_under_restart_policy_uses_remaining() {
        let mut clock = running(10_000);
        assert!(clock.add_units(4_000, 5, AddPolicy::Restart));
        assert_eq!(clock.duration(), TimerDuration::from_units(11));
    }

    #[test]
    fn add_under_accumulate_policy_keeps_progress() {
        let mut clock = running(10_000);
        assert!(clock.add_units(4_000, 5, AddPolicy::Accumulate));
        assert_eq!(clock.duration(), TimerDuration::from_units(15));
        assert_eq!(clock.elapsed_units(4_000), 4);
        assert_eq!(clock.remaining_units(4_000), Count::Finite(11));
    }

    #[test]
    fn add_ignores_zero_and_unbounded() {
        let mut clock = running(10_000);
        assert!(!clock.add_units(0, 0, AddPolicy::Accumulate));
        assert_eq!(clock.duration(), TimerDuration::from_units(10));

        let mut unbounded = TimerClock::new(TimerDuration::Unbounded);
        assert!(!unbounded.add_units(0, 3, AddPolicy::Restart));
        assert!(unbounded.duration().is_unbounded());
    }
}
