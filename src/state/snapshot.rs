//! Point-in-time view of the countdown

use serde::Serialize;

use crate::{
    countdown::{Count, Countdown, Status, TimerDuration},
    ports::{AccessibilitySink, Renderer, Scheduler},
};

/// Countdown state as published to readers outside the driver task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub status: Status,
    pub duration: TimerDuration,
    pub elapsed_ms: i64,
    pub remaining_ms: Option<i64>,
    /// Rounded elapsed units
    pub elapsed: i64,
    /// Configured units minus rounded elapsed units
    pub remaining: Count,
    /// The number currently on screen
    pub label: String,
    pub unit: Option<String>,
    pub radius: f64,
}

impl TimerSnapshot {
    /// Capture the current state of a countdown
    pub fn capture<R, A, S>(countdown: &Countdown<R, A, S>) -> Self
    where
        R: Renderer,
        A: AccessibilitySink,
        S: Scheduler,
    {
        let frame = countdown.current_frame();
        Self {
            status: countdown.status(),
            duration: countdown.clock().duration(),
            elapsed_ms: countdown.elapsed_ms(),
            remaining_ms: countdown.remaining_ms(),
            elapsed: countdown.get_elapsed_time(),
            remaining: countdown.get_time_remaining(),
            label: frame.label,
            unit: frame.unit,
            radius: countdown.radius(),
        }
    }

    /// Check if the countdown is running
    pub fn is_started(&self) -> bool {
        self.status == Status::Started
    }
}
