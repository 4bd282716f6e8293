//! Recording fakes for the collaborator ports

use std::time::Duration;

use super::{AccessibilitySink, ArcShape, FontSpec, Renderer, Scheduler, TickToken};

/// Scheduler driven by hand: time only moves when the test advances it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub now: i64,
    next_id: u64,
    pub armed: Vec<(TickToken, Duration)>,
    pub cancelled: Vec<TickToken>,
}

impl ManualScheduler {
    pub fn advance(&mut self, ms: i64) {
        self.now += ms;
    }

    /// Tokens armed and not yet cancelled.
    pub fn live(&self) -> Vec<TickToken> {
        self.armed
            .iter()
            .map(|(token, _)| *token)
            .filter(|token| !self.cancelled.contains(token))
            .collect()
    }

    pub fn last_interval(&self) -> Option<Duration> {
        self.armed.last().map(|(_, interval)| *interval)
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> i64 {
        self.now
    }

    fn schedule_repeating(&mut self, interval: Duration) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        self.armed.push((token, interval));
        token
    }

    fn cancel(&mut self, token: TickToken) {
        self.cancelled.push(token);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Fill { arc: ArcShape, color: String },
    Stroke { arc: ArcShape, color: String, line_width: f64 },
    Text { text: String, x: f64, y: f64, font: FontSpec, color: String },
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_fill(&self) -> Option<ArcShape> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Fill { arc, .. } => Some(*arc),
            _ => None,
        })
    }

    pub fn strokes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Stroke { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_arc(&mut self, arc: ArcShape, color: &str) {
        self.calls.push(DrawCall::Fill { arc, color: color.to_string() });
    }

    fn stroke_arc(&mut self, arc: ArcShape, color: &str, line_width: f64) {
        self.calls.push(DrawCall::Stroke { arc, color: color.to_string(), line_width });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: &FontSpec, color: &str) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.clone(),
            color: color.to_string(),
        });
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub announcements: Vec<String>,
}

impl AccessibilitySink for RecordingSink {
    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }
}
