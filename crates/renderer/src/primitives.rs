//! Drawing primitives in pixel space.
//!
//! Every primitive is fully resolved (position, size, color) before it
//! reaches a canvas, so canvases never need to know about grids or fonts.

use heatmap_common::{HeatmapError, HeatmapResult};

use crate::colormap::Color;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    fn validate(&self, what: &str) -> HeatmapResult<()> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(HeatmapError::RenderError(format!(
                "{} coordinates must be finite",
                what
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(HeatmapError::RenderError(format!(
                "{} size must be >= 0",
                what
            )));
        }
        Ok(())
    }
}

/// Filled heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPrimitive {
    pub rect: Rect,
    pub color: Color,
}

impl CellPrimitive {
    pub fn validate(&self) -> HeatmapResult<()> {
        self.rect.validate("cell")
    }
}

/// Straight line segment; gridlines and ticks are axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl LinePrimitive {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32, stroke_width: f32, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Area covered by the stroke.
    pub fn bounds(&self) -> Rect {
        let half = self.stroke_width / 2.0;
        let (x_min, x_max) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y_min, y_max) = (self.y1.min(self.y2), self.y1.max(self.y2));
        Rect::new(
            x_min - half,
            y_min - half,
            x_max - x_min + self.stroke_width,
            y_max - y_min + self.stroke_width,
        )
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x1 + dx,
            self.y1 + dy,
            self.x2 + dx,
            self.y2 + dy,
            self.stroke_width,
            self.color,
        )
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(HeatmapError::RenderError(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(HeatmapError::RenderError(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Reading direction of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrientation {
    Horizontal,
    /// Rotated a quarter turn counter-clockwise, read bottom to top.
    Vertical,
}

/// Positioned label. `bounds` is the box the text occupies once drawn,
/// already accounting for orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub bounds: Rect,
    pub font_size_px: f32,
    pub weight: FontWeight,
    pub orientation: TextOrientation,
    pub color: Color,
}

impl TextPrimitive {
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            bounds: self.bounds.translate(dx, dy),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if self.text.is_empty() {
            return Err(HeatmapError::RenderError(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(HeatmapError::RenderError(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.bounds.validate("text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(-5.0, 4.0, 3.0, 20.0);
        assert_eq!(a.union(&b), Rect::new(-5.0, 0.0, 15.0, 24.0));
    }

    #[test]
    fn test_line_bounds_include_stroke() {
        let line = LinePrimitive::new(0.0, 5.0, 10.0, 5.0, 2.0, Color::gray());
        assert_eq!(line.bounds(), Rect::new(-1.0, 4.0, 12.0, 2.0));
    }

    #[test]
    fn test_validation() {
        let line = LinePrimitive::new(0.0, 0.0, f32::NAN, 0.0, 1.0, Color::gray());
        assert!(line.validate().is_err());

        let text = TextPrimitive {
            text: String::new(),
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
            font_size_px: 12.0,
            weight: FontWeight::Regular,
            orientation: TextOrientation::Horizontal,
            color: Color::black(),
        };
        assert!(text.validate().is_err());
    }
}
