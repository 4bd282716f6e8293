//! Renderer drawing the countdown as one terminal line

use std::io::{self, Write};

use tracing::warn;

use crate::{
    countdown::{FULL_SWEEP, START_ANGLE},
    ports::{ArcShape, FontSpec, Renderer},
};

const BAR_CELLS: usize = 20;

/// Approximates the circle as a bar and the label as text.
///
/// Like a canvas, later text painted at the same position covers earlier
/// text, so the drop shadow under the number never shows.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    sweep: Option<f64>,
    texts: Vec<(i64, String)>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sweep: None,
            texts: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn line(&self) -> String {
        let fraction = self
            .sweep
            .map(|end| ((end - START_ANGLE) / FULL_SWEEP).clamp(0.0, 1.0))
            .unwrap_or(0.0);
        let filled = (fraction * BAR_CELLS as f64).round() as usize;

        let mut texts = self.texts.clone();
        texts.sort_by_key(|(row, _)| *row);
        let label: Vec<String> = texts.into_iter().map(|(_, text)| text).collect();

        format!(
            "[{}{}] {}",
            "#".repeat(filled),
            "-".repeat(BAR_CELLS - filled),
            label.join(" ")
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.sweep = None;
        self.texts.clear();
    }

    fn fill_arc(&mut self, arc: ArcShape, _color: &str) {
        self.sweep = Some(arc.end_angle);
    }

    fn stroke_arc(&mut self, _arc: ArcShape, _color: &str, _line_width: f64) {}

    fn draw_text(&mut self, text: &str, _x: f64, y: f64, _font: &FontSpec, _color: &str) {
        // Positions are compared at hundredths of a pixel.
        let row = (y * 100.0).round() as i64;
        self.texts.retain(|(existing, _)| *existing != row);
        self.texts.push((row, text.to_string()));
    }

    fn present(&mut self) {
        let line = self.line();
        if let Err(e) = write!(self.out, "\r{}\x1b[K", line).and_then(|_| self.out.flush()) {
            warn!("Failed to draw countdown: {}", e);
        }
    }
}
