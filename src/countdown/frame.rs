//! Time-to-angle and time-to-label derivation

use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use super::duration::{Count, TimerDuration, UNIT_MS};
use crate::config::UnitLabel;

/// 12 o'clock on a y-down surface.
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// One full clockwise turn.
pub const FULL_SWEEP: f64 = 2.0 * PI;
/// End angle of an untouched countdown, 270 degrees.
pub const FULL_CIRCLE_END: f64 = START_ANGLE + FULL_SWEEP;

/// What one tick paints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub elapsed_ms: i64,
    /// Remaining whole units, floored.
    pub remaining: Count,
    /// End angle of the foreground arc.
    pub sweep_angle: f64,
    /// The number shown and announced.
    pub label: String,
    /// The number painted underneath as a drop shadow, one higher.
    pub shadow: String,
    pub unit: Option<String>,
}

impl RenderFrame {
    pub fn at(elapsed_ms: i64, duration: TimerDuration, unit_label: Option<&UnitLabel>) -> Self {
        let remaining = match duration {
            TimerDuration::Bounded(ms) => Count::Finite((ms - elapsed_ms).div_euclid(UNIT_MS)),
            TimerDuration::Unbounded => Count::Infinite,
        };
        Self::build(elapsed_ms, remaining, sweep_angle(elapsed_ms, duration), unit_label)
    }

    /// The untouched countdown drawn when a run starts.
    pub fn full(duration: TimerDuration, unit_label: Option<&UnitLabel>) -> Self {
        Self::build(0, duration.units(), FULL_CIRCLE_END, unit_label)
    }

    /// The last frame of a completed run; the count never shows below zero.
    pub fn terminal(elapsed_ms: i64, duration: TimerDuration, unit_label: Option<&UnitLabel>) -> Self {
        let remaining = match Self::at(elapsed_ms, duration, unit_label).remaining {
            Count::Finite(n) => Count::Finite(n.max(0)),
            Count::Infinite => Count::Infinite,
        };
        Self::build(elapsed_ms, remaining, START_ANGLE, unit_label)
    }

    fn build(elapsed_ms: i64, remaining: Count, sweep_angle: f64, unit_label: Option<&UnitLabel>) -> Self {
        let unit = unit_label.map(|label| {
            if remaining.is_one() {
                label.singular.clone()
            } else {
                label.plural.clone()
            }
        });
        Self {
            elapsed_ms,
            remaining,
            sweep_angle,
            label: remaining.to_string(),
            shadow: remaining.succ().to_string(),
            unit,
        }
    }
}

/// End angle of the foreground arc after `elapsed_ms`.
///
/// Sweeps clockwise from a full circle towards 12 o'clock. Unbounded and
/// non-positive lengths have no meaningful fraction and draw the full circle.
pub fn sweep_angle(elapsed_ms: i64, duration: TimerDuration) -> f64 {
    match duration.millis() {
        Some(ms) if ms > 0 => FULL_CIRCLE_END - FULL_SWEEP * elapsed_ms as f64 / ms as f64,
        _ => FULL_CIRCLE_END,
    }
}
