//! Periodic tick scheduling

use std::time::Duration;

/// Opaque handle to one armed chain of periodic ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(pub u64);

/// Source of time and of repeating ticks.
///
/// Implementations arrange for the owner of the countdown to call
/// `Countdown::tick` every `interval` until the token is cancelled. Ticks
/// carrying a cancelled token must not reach the countdown.
pub trait Scheduler {
    /// Current instant in milliseconds on a monotonic time line.
    fn now_ms(&self) -> i64;

    fn schedule_repeating(&mut self, interval: Duration) -> TickToken;

    /// Cancels the chain immediately. Unknown tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}
