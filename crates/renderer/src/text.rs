//! Embedded fonts and text measurement.

use heatmap_common::{HeatmapError, HeatmapResult};
use rusttype::{point, Font, Scale};

use crate::primitives::FontWeight;

/// Embedded font data - DejaVu Sans (regular and bold)
const REGULAR_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const BOLD_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Size of a laid-out single line of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    /// Line height (ascent + descent).
    pub height: f32,
}

/// Fonts used for every label of the heatmap.
pub struct FontSet {
    regular: Font<'static>,
    bold: Font<'static>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet").finish_non_exhaustive()
    }
}

impl FontSet {
    /// Load the embedded fonts.
    pub fn load() -> HeatmapResult<Self> {
        let regular = Font::try_from_bytes(REGULAR_FONT_DATA)
            .ok_or_else(|| HeatmapError::RenderError("failed to load regular font".into()))?;
        let bold = Font::try_from_bytes(BOLD_FONT_DATA)
            .ok_or_else(|| HeatmapError::RenderError("failed to load bold font".into()))?;
        Ok(Self { regular, bold })
    }

    pub fn font(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Measure one line of text at the given pixel size.
    pub fn measure(&self, text: &str, size_px: f32, weight: FontWeight) -> TextExtent {
        let font = self.font(weight);
        let scale = Scale::uniform(size_px);
        let v_metrics = font.v_metrics(scale);

        let width = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);

        TextExtent {
            width,
            height: v_metrics.ascent - v_metrics.descent,
        }
    }
}
