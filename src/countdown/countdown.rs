//! The countdown handle: control operations and the periodic tick

use tracing::{debug, info};

use super::{
    clock::{AddPolicy, TimerClock},
    duration::Count,
    frame::{RenderFrame, FULL_CIRCLE_END, START_ANGLE},
    geometry::Geometry,
    status::Status,
};
use crate::{
    config::CountdownConfig,
    ports::{AccessibilitySink, Renderer, Scheduler, TickToken},
};

/// Completion callback. Receives the countdown so it may restart it.
pub type Callback<R, A, S> = Box<dyn FnMut(&mut Countdown<R, A, S>) + Send>;

/// A circular countdown bound to its drawing surface, accessibility sink
/// and scheduler.
///
/// Control operations mutate the clock and arm or cancel the tick; `tick`
/// only reads the clock and paints. Operations that do not apply to the
/// current status are ignored.
pub struct Countdown<R: Renderer, A: AccessibilitySink, S: Scheduler> {
    config: CountdownConfig,
    clock: TimerClock,
    geometry: Geometry,
    tick: Option<TickToken>,
    renderer: R,
    sink: A,
    scheduler: S,
    on_complete: Option<Callback<R, A, S>>,
}

impl<R: Renderer, A: AccessibilitySink, S: Scheduler> Countdown<R, A, S> {
    /// Create a countdown, starting it right away if `autostart` is set
    pub fn new(config: CountdownConfig, renderer: R, sink: A, scheduler: S) -> Self {
        let geometry = Geometry::from_style(&config.style);
        let mut countdown = Self {
            clock: TimerClock::new(config.duration),
            geometry,
            tick: None,
            renderer,
            sink,
            scheduler,
            on_complete: None,
            config,
        };

        countdown
            .renderer
            .clear(countdown.geometry.width, countdown.geometry.height);
        if countdown.config.autostart {
            countdown.start();
        }
        countdown
    }

    /// Set the callback fired once each time the countdown runs out
    pub fn set_on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn status(&self) -> Status {
        Status::derive(self.clock.is_paused(), self.tick.is_some())
    }

    /// Start from zero elapsed time, restarting if already running.
    pub fn start(&mut self) {
        if let Some(token) = self.tick.take() {
            debug!("Restarting running countdown");
            self.scheduler.cancel(token);
        }

        let now = self.scheduler.now_ms();
        self.clock.restart(now);

        let frame = RenderFrame::full(self.clock.duration(), self.config.label.as_ref());
        self.paint(&frame, true);
        self.arm();
        info!("Countdown started: {} units", frame.label);
    }

    /// Freeze elapsed time. Ignored unless started.
    pub fn pause(&mut self) {
        if self.status() != Status::Started {
            debug!("Ignoring pause while {}", self.status());
            return;
        }

        let now = self.scheduler.now_ms();
        self.clock.pause(now);
        if let Some(token) = self.tick.take() {
            self.scheduler.cancel(token);
        }
        info!("Countdown paused");
    }

    /// Continue from the paused elapsed time. Ignored unless paused.
    pub fn resume(&mut self) {
        if self.status() != Status::Paused {
            debug!("Ignoring resume while {}", self.status());
            return;
        }

        let now = self.scheduler.now_ms();
        self.clock.resume(now);
        self.arm();
        info!("Countdown resumed");
    }

    /// Cancel the tick. Returns whether a tick was active.
    pub fn stop(&mut self) -> bool {
        self.stop_with(|_| {})
    }

    /// Cancel the tick, then call `on_stopped` once. Neither happens unless
    /// a tick is active.
    pub fn stop_with<F>(&mut self, on_stopped: F) -> bool
    where
        F: FnOnce(&mut Self),
    {
        let Some(token) = self.tick.take() else {
            debug!("Ignoring stop while {}", self.status());
            return false;
        };

        self.scheduler.cancel(token);
        info!("Countdown stopped");
        on_stopped(self);
        true
    }

    /// Give back `units` of remaining time, never beyond the configured
    /// length. Progress of the sweep is kept.
    pub fn extend_timer(&mut self, units: i64) -> bool {
        let now = self.scheduler.now_ms();
        self.clock.extend(now, units)
    }

    /// Lengthen the countdown by `units` under the configured policy.
    pub fn add_seconds(&mut self, units: i64) -> bool {
        let now = self.scheduler.now_ms();
        let policy = self.config.add_policy;
        if !self.clock.add_units(now, units, policy) {
            return false;
        }

        if policy == AddPolicy::Restart {
            self.start();
        }
        true
    }

    /// Elapsed whole units, rounded.
    pub fn get_elapsed_time(&self) -> i64 {
        self.clock.elapsed_units(self.scheduler.now_ms())
    }

    /// Configured units minus `get_elapsed_time`.
    pub fn get_time_remaining(&self) -> Count {
        self.clock.remaining_units(self.scheduler.now_ms())
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.clock.elapsed_ms(self.scheduler.now_ms())
    }

    /// Remaining milliseconds, `None` when unbounded.
    pub fn remaining_ms(&self) -> Option<i64> {
        self.clock.remaining_ms(self.scheduler.now_ms())
    }

    /// Whether `token` is the currently armed tick chain
    pub fn is_armed_with(&self, token: TickToken) -> bool {
        self.tick == Some(token)
    }

    /// Redraw for the current instant, completing the run once its length
    /// has elapsed. Never re-arms itself.
    pub fn tick(&mut self) {
        if self.tick.is_none() {
            debug!("Ignoring tick while {}", self.status());
            return;
        }

        let elapsed = self.elapsed_ms();
        let duration = self.clock.duration();
        if duration.is_running_at(elapsed) {
            let frame = RenderFrame::at(elapsed, duration, self.config.label.as_ref());
            self.paint(&frame, true);
        } else if self.status() != Status::Stopped {
            let frame = RenderFrame::terminal(elapsed, duration, self.config.label.as_ref());
            self.paint(&frame, false);
            self.complete();
        }
    }

    /// The frame for the current instant, without painting it
    pub fn current_frame(&self) -> RenderFrame {
        let elapsed = self.elapsed_ms();
        let duration = self.clock.duration();
        if duration.is_running_at(elapsed) {
            RenderFrame::at(elapsed, duration, self.config.label.as_ref())
        } else {
            RenderFrame::terminal(elapsed, duration, self.config.label.as_ref())
        }
    }

    pub fn radius(&self) -> f64 {
        self.geometry.radius
    }

    /// Change the radius and redraw. Non-positive radii are ignored.
    ///
    /// Returns whether the radius was accepted.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        if !(radius.is_finite() && radius > 0.0) {
            debug!("Ignoring radius {}", radius);
            return false;
        }

        self.geometry.resize(radius);
        let frame = self.current_frame();
        let running = self.clock.duration().is_running_at(frame.elapsed_ms);
        self.paint(&frame, running);
        true
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn clock(&self) -> &TimerClock {
        &self.clock
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn arm(&mut self) {
        let interval = self.config.interval();
        let token = self.scheduler.schedule_repeating(interval);
        debug!("Armed tick {:?} every {:?}", token, interval);
        self.tick = Some(token);
    }

    fn complete(&mut self) {
        info!("Countdown complete");
        let mut callback = self.on_complete.take();
        self.stop_with(|countdown| {
            if let Some(callback) = callback.as_mut() {
                callback(countdown);
            }
        });
        if self.on_complete.is_none() {
            self.on_complete = callback;
        }
    }

    /// Erase, paint the background circle, optionally the swept arc with its
    /// outline, then the label.
    fn paint(&mut self, frame: &RenderFrame, foreground: bool) {
        let style = &self.config.style;
        let geometry = &self.geometry;

        self.renderer.clear(geometry.width, geometry.height);
        self.renderer
            .fill_arc(geometry.arc(START_ANGLE, FULL_CIRCLE_END), &style.fill_style);

        if foreground {
            let arc = geometry.arc(START_ANGLE, frame.sweep_angle);
            self.renderer.fill_arc(arc, &style.fill_style);
            self.renderer
                .stroke_arc(arc, &style.stroke_style, geometry.stroke_width);
        }

        let (x, y) = geometry.number_position(frame.unit.is_some());
        let font = geometry.number_font(style);
        self.renderer
            .draw_text(&frame.shadow, x, y, &font, &style.fill_style);
        self.renderer
            .draw_text(&frame.label, x, y, &font, &style.font_color);

        if let Some(unit) = &frame.unit {
            let (x, y) = geometry.unit_position();
            self.renderer
                .draw_text(unit, x, y, &geometry.unit_font(style), &style.font_color);
        }

        self.renderer.present();
        self.sink.announce(&frame.label);
    }
}

impl<R: Renderer, A: AccessibilitySink, S: Scheduler> Drop for Countdown<R, A, S> {
    fn drop(&mut self) {
        if let Some(token) = self.tick.take() {
            self.scheduler.cancel(token);
        }
    }
}
