//! Geometry derived from the style

use crate::{
    config::Style,
    ports::{ArcShape, FontSpec},
};

/// Mutable render state, computed from the style once and again only when
/// the radius changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Geometry {
    pub fn from_style(style: &Style) -> Self {
        let radius = style.radius;
        let stroke_width = match style.stroke_width {
            Some(width) if width > 0.0 => width,
            _ => radius / 4.0,
        };
        let font_size = style.font_size.unwrap_or(radius / 1.2);
        Self::layout(radius, stroke_width, font_size)
    }

    fn layout(radius: f64, stroke_width: f64, font_size: f64) -> Self {
        let center = radius + stroke_width;
        Self {
            radius,
            stroke_width,
            font_size,
            width: center * 2.0,
            height: center * 2.0,
            center_x: center,
            center_y: center,
        }
    }

    /// Changes the radius, scaling the font with it. Stroke width is kept.
    pub fn resize(&mut self, radius: f64) {
        let ratio = radius / self.radius;
        *self = Self::layout(radius, self.stroke_width, self.font_size * ratio);
    }

    pub fn arc(&self, start_angle: f64, end_angle: f64) -> ArcShape {
        ArcShape {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.radius,
            start_angle,
            end_angle,
        }
    }

    /// Center of the number; lifted when a unit word sits beneath it.
    pub fn number_position(&self, with_unit: bool) -> (f64, f64) {
        let y = self.height / 2.0;
        let y = if with_unit { y - self.font_size / 6.2 } else { y };
        (self.width / 2.0, y)
    }

    pub fn unit_position(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0 + self.font_size / 2.2)
    }

    pub fn number_font(&self, style: &Style) -> FontSpec {
        FontSpec {
            weight: style.font_weight.clone(),
            size: self.font_size,
            family: style.font_family.clone(),
            small_caps: false,
        }
    }

    pub fn unit_font(&self, style: &Style) -> FontSpec {
        FontSpec {
            weight: "normal".to_string(),
            size: self.font_size / 3.0,
            family: style.font_family.clone(),
            small_caps: true,
        }
    }
}
