//! Color mapping for heatmap cells.

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Neutral gray used for gridlines.
    pub const fn gray() -> Self {
        Self::rgb(128, 128, 128)
    }

    /// WCAG relative luminance in 0..=1.
    pub fn relative_luminance(&self) -> f32 {
        fn linear(channel: u8) -> f32 {
            let c = channel as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Text color readable on top of this color.
    pub fn contrasting_text(&self) -> Color {
        if self.relative_luminance() > 0.408 {
            Color::rgb(38, 38, 38)
        } else {
            Color::white()
        }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Number of discrete levels a normalized value is snapped to.
const LEVELS: usize = 256;

/// Perceptually uniform color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
}

impl Colormap {
    pub fn viridis() -> Self {
        Self::Viridis
    }

    fn gradient(&self) -> colorous::Gradient {
        match self {
            Self::Viridis => colorous::VIRIDIS,
        }
    }

    /// Color for a normalized value in 0..=1 (clamped), snapped to one of
    /// the 256 table entries.
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let level = ((t * LEVELS as f32) as usize).min(LEVELS - 1);
        let c = self.gradient().eval_rational(level, LEVELS);
        Color::rgb(c.r, c.g, c.b)
    }
}

/// Maps cell values onto a colormap over a fixed value domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    colormap: Colormap,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(colormap: Colormap, min: f64, max: f64) -> Self {
        Self { colormap, min, max }
    }

    /// Normalized position of a value; a flat domain maps to 0.
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        let range = if range.abs() < 0.001 { 1.0 } else { range };
        ((value - self.min) / range).max(0.0).min(1.0) as f32
    }

    pub fn color(&self, value: f64) -> Color {
        self.colormap.sample(self.normalize(value))
    }
}
