//! Physical layout of the heatmap.
//!
//! Image size follows grid shape so cells stay square whatever the number
//! of counters. Lengths are planned in inches and points, then converted to
//! pixels at a fixed resolution.

use crate::error::{HeatmapError, HeatmapResult};
use crate::grid::Grid;
use crate::profile::Profile;

/// Output resolution, pixels per inch.
pub const DPI: f32 = 300.0;

/// Points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Font sizes and spacings, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub title_size: f32,
    pub title_pad: f32,
    pub axis_label_size: f32,
    pub axis_label_pad: f32,
    pub tick_label_size: f32,
    pub tick_length: f32,
    pub tick_width: f32,
    pub tick_pad: f32,
    pub annotation_size: f32,
    pub gridline_width: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 14.0,
            title_pad: 10.0,
            axis_label_size: 12.0,
            axis_label_pad: 5.0,
            tick_label_size: 12.0,
            tick_length: 3.5,
            tick_width: 0.8,
            tick_pad: 3.5,
            annotation_size: 10.0,
            gridline_width: 0.2,
        }
    }
}

/// Planned size of the cell area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Cell edge, inches.
    pub cell_edge: f32,
    /// Cell area width, inches.
    pub width: f32,
    /// Cell area height, inches.
    pub height: f32,
    pub dpi: f32,
    /// Padding kept around the trimmed image, inches.
    pub save_pad: f32,
    pub typography: Typography,
}

impl Layout {
    /// Plan the layout of `rows` x `cols` cells with the given edge length.
    pub fn plan(rows: usize, cols: usize, cell_edge: f32) -> HeatmapResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(HeatmapError::EmptyGrid);
        }
        if !cell_edge.is_finite() || cell_edge <= 0.0 {
            return Err(HeatmapError::RenderError(format!(
                "cell edge must be finite and > 0, got {}",
                cell_edge
            )));
        }

        Ok(Self {
            rows,
            cols,
            cell_edge,
            width: cols as f32 * cell_edge,
            height: rows as f32 * cell_edge,
            dpi: DPI,
            save_pad: 0.1,
            typography: Typography::default(),
        })
    }

    /// Plan the layout for a built grid using its profile's cell edge.
    pub fn for_grid(grid: &Grid) -> HeatmapResult<Self> {
        Self::for_profile(grid.profile(), grid.n_rows())
    }

    pub fn for_profile(profile: Profile, rows: usize) -> HeatmapResult<Self> {
        Self::plan(rows, profile.bucket_count(), profile.cell_edge_inches())
    }

    /// Cell edge in pixels.
    pub fn cell_px(&self) -> f32 {
        self.cell_edge * self.dpi
    }

    /// Cell area width in pixels.
    pub fn width_px(&self) -> u32 {
        (self.width * self.dpi).round() as u32
    }

    /// Cell area height in pixels.
    pub fn height_px(&self) -> u32 {
        (self.height * self.dpi).round() as u32
    }

    /// Convert a length in points to pixels.
    pub fn pt_to_px(&self, points: f32) -> f32 {
        points * self.dpi / POINTS_PER_INCH
    }

    /// Save padding in pixels.
    pub fn save_pad_px(&self) -> f32 {
        self.save_pad * self.dpi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_layout() {
        let layout = Layout::for_profile(Profile::Day, 3).unwrap();
        assert!((layout.width - 14.4).abs() < 1e-4);
        assert!((layout.height - 1.8).abs() < 1e-4);
        assert_eq!(layout.width_px(), 4320);
        assert_eq!(layout.height_px(), 540);
        assert!((layout.cell_px() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_week_layout() {
        let layout = Layout::for_profile(Profile::Week, 2).unwrap();
        assert_eq!(layout.width_px(), 1680);
        assert_eq!(layout.height_px(), 480);
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert!(matches!(
            Layout::for_profile(Profile::Day, 0),
            Err(HeatmapError::EmptyGrid)
        ));
    }

    #[test]
    fn test_points_to_pixels() {
        let layout = Layout::plan(1, 1, 1.0).unwrap();
        assert!((layout.pt_to_px(72.0) - 300.0).abs() < 1e-3);
        assert!((layout.save_pad_px() - 30.0).abs() < 1e-3);
    }
}
