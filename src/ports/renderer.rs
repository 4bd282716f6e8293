//! Drawing surface and accessibility contracts

/// A circular arc swept clockwise from `start_angle` to `end_angle`, in
/// radians, measured in the surface's y-down convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Font used for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub weight: String,
    pub size: f64,
    pub family: String,
    pub small_caps: bool,
}

/// Drawing surface the countdown paints onto.
///
/// Colors are passed through from the style untouched.
pub trait Renderer {
    /// Erases a `width` x `height` region from the origin.
    fn clear(&mut self, width: f64, height: f64);

    fn fill_arc(&mut self, arc: ArcShape, color: &str);

    fn stroke_arc(&mut self, arc: ArcShape, color: &str, line_width: f64);

    /// Paints `text` centered on `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: &FontSpec, color: &str);

    /// Called once a whole frame has been painted.
    fn present(&mut self) {}
}

/// Receives the bare remaining-count text on every frame.
pub trait AccessibilitySink {
    fn announce(&mut self, text: &str);
}
