//! Pixel canvas backed by an RGBA image buffer.

use heatmap_common::{HeatmapError, HeatmapResult};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as PixelRect;
use rusttype::Scale;
use tracing::debug;

use crate::canvas::Canvas;
use crate::colormap::Color;
use crate::png::create_png_auto;
use crate::primitives::{CellPrimitive, LinePrimitive, TextOrientation, TextPrimitive};
use crate::text::FontSet;

/// Raster canvas that encodes to PNG on export.
pub struct RasterCanvas<'a> {
    image: RgbaImage,
    fonts: &'a FontSet,
    dpi: f32,
}

impl<'a> RasterCanvas<'a> {
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        fonts: &'a FontSet,
        dpi: f32,
    ) -> HeatmapResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeatmapError::RenderError(format!(
                "invalid canvas size: {}x{}",
                width, height
            )));
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background.to_rgba()),
            fonts,
            dpi,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color::new(r, g, b, a))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Blend `color` over the pixel span `[x0, x1) x row` with `coverage`.
    fn blend_row(&mut self, row: i64, x0: i64, x1: i64, color: Color, coverage: f32) {
        if row < 0 || row >= self.height() as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i64);
        for x in x0..x1 {
            let px = self.image.get_pixel_mut(x as u32, row as u32);
            *px = blend(*px, color, coverage);
        }
    }

    fn blend_column(&mut self, col: i64, y0: i64, y1: i64, color: Color, coverage: f32) {
        if col < 0 || col >= self.width() as i64 {
            return;
        }
        let y0 = y0.max(0);
        let y1 = y1.min(self.height() as i64);
        for y in y0..y1 {
            let px = self.image.get_pixel_mut(col as u32, y as u32);
            *px = blend(*px, color, coverage);
        }
    }
}

impl std::fmt::Debug for RasterCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("dpi", &self.dpi)
            .finish()
    }
}

/// Source-over blend of an opaque color at partial coverage.
fn blend(dst: Rgba<u8>, color: Color, coverage: f32) -> Rgba<u8> {
    let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    let mix = |d: u8, s: u8| (d as f32 * (1.0 - alpha) + s as f32 * alpha).round() as u8;
    Rgba([
        mix(dst[0], color.r),
        mix(dst[1], color.g),
        mix(dst[2], color.b),
        dst[3].max((alpha * 255.0).round() as u8),
    ])
}

/// Fraction of the unit interval `[i, i + 1)` covered by `[lo, hi)`.
fn span_coverage(i: i64, lo: f32, hi: f32) -> f32 {
    let start = lo.max(i as f32);
    let end = hi.min(i as f32 + 1.0);
    (end - start).max(0.0)
}

impl Canvas for RasterCanvas<'_> {
    fn draw_cell(&mut self, cell: &CellPrimitive) -> HeatmapResult<()> {
        cell.validate()?;
        let x0 = cell.rect.x.round() as i32;
        let y0 = cell.rect.y.round() as i32;
        let w = (cell.rect.right().round() as i32 - x0).max(0) as u32;
        let h = (cell.rect.bottom().round() as i32 - y0).max(0) as u32;
        if w > 0 && h > 0 {
            draw_filled_rect_mut(
                &mut self.image,
                PixelRect::at(x0, y0).of_size(w, h),
                cell.color.to_rgba(),
            );
        }
        Ok(())
    }

    fn draw_gridline(&mut self, line: &LinePrimitive) -> HeatmapResult<()> {
        line.validate()?;
        let half = line.stroke_width / 2.0;

        if line.y1 == line.y2 {
            let (lo, hi) = (line.y1 - half, line.y1 + half);
            let x0 = line.x1.min(line.x2).round() as i64;
            let x1 = line.x1.max(line.x2).round() as i64;
            for row in lo.floor() as i64..hi.ceil() as i64 {
                let coverage = span_coverage(row, lo, hi);
                self.blend_row(row, x0, x1, line.color, coverage);
            }
        } else if line.x1 == line.x2 {
            let (lo, hi) = (line.x1 - half, line.x1 + half);
            let y0 = line.y1.min(line.y2).round() as i64;
            let y1 = line.y1.max(line.y2).round() as i64;
            for col in lo.floor() as i64..hi.ceil() as i64 {
                let coverage = span_coverage(col, lo, hi);
                self.blend_column(col, y0, y1, line.color, coverage);
            }
        } else {
            draw_line_segment_mut(
                &mut self.image,
                (line.x1, line.y1),
                (line.x2, line.y2),
                line.color.to_rgba(),
            );
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> HeatmapResult<()> {
        text.validate()?;
        let font = self.fonts.font(text.weight);
        let scale = Scale::uniform(text.font_size_px);
        let x = text.bounds.x.round() as i64;
        let y = text.bounds.y.round() as i64;

        match text.orientation {
            TextOrientation::Horizontal => {
                imageproc::drawing::draw_text_mut(
                    &mut self.image,
                    text.color.to_rgba(),
                    x as i32,
                    y as i32,
                    scale,
                    font,
                    &text.text,
                );
            }
            TextOrientation::Vertical => {
                // Lay the text out horizontally offscreen, then turn it.
                let w = text.bounds.height.ceil().max(1.0) as u32;
                let h = text.bounds.width.ceil().max(1.0) as u32;
                let mut label = RgbaImage::from_pixel(
                    w,
                    h,
                    Color::new(text.color.r, text.color.g, text.color.b, 0).to_rgba(),
                );
                imageproc::drawing::draw_text_mut(
                    &mut label,
                    text.color.to_rgba(),
                    0,
                    0,
                    scale,
                    font,
                    &text.text,
                );
                let rotated = imageops::rotate270(&label);
                imageops::overlay(&mut self.image, &rotated, x, y);
            }
        }
        Ok(())
    }

    fn export_raster(&mut self) -> HeatmapResult<Vec<u8>> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        let png = create_png_auto(self.image.as_raw(), width, height, self.dpi)?;
        debug!(width, height, bytes = png.len(), "Encoded PNG");
        Ok(png)
    }
}
