//! End-to-end heatmap rendering: document in, PNG out.

use std::time::Instant;

use heatmap_common::{describe, Annotations, Grid, HeatmapResult, Layout, ObservationDocument};
use tracing::{debug, info, instrument};

use crate::canvas::{paint_scene, Canvas};
use crate::colormap::Colormap;
use crate::raster::RasterCanvas;
use crate::scene::{build_scene, HeatmapInput, Scene};
use crate::text::FontSet;

/// Encoded heatmap and what was learned while drawing it.
#[derive(Debug, Clone)]
pub struct RenderedHeatmap {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Plain-language summary; `None` when every count is zero.
    pub alt_text: Option<String>,
}

/// Renders observation documents with a fixed font set and colormap.
#[derive(Debug)]
pub struct HeatmapRenderer {
    fonts: FontSet,
    colormap: Colormap,
}

impl HeatmapRenderer {
    pub fn new() -> HeatmapResult<Self> {
        Ok(Self {
            fonts: FontSet::load()?,
            colormap: Colormap::viridis(),
        })
    }

    /// Resolve the drawing commands for a grid without rasterizing.
    pub fn scene(&self, grid: &Grid, title: &str) -> HeatmapResult<Scene> {
        let layout = Layout::for_grid(grid)?;
        let annotations = Annotations::from_grid(grid);
        let input = HeatmapInput {
            grid,
            annotations: &annotations,
            layout: &layout,
            title,
        };
        build_scene(&input, &self.fonts, self.colormap)
    }

    /// Paint a grid onto an arbitrary canvas.
    pub fn paint(&self, grid: &Grid, title: &str, canvas: &mut dyn Canvas) -> HeatmapResult<Scene> {
        let scene = self.scene(grid, title)?;
        paint_scene(&scene, canvas)?;
        Ok(scene)
    }

    /// Render a grid to PNG bytes.
    pub fn render(&self, grid: &Grid, title: &str) -> HeatmapResult<(Vec<u8>, Scene)> {
        let scene = self.scene(grid, title)?;
        let dpi = Layout::for_grid(grid)?.dpi;
        let mut canvas =
            RasterCanvas::new(scene.width, scene.height, scene.background, &self.fonts, dpi)?;
        paint_scene(&scene, &mut canvas)?;
        let png = canvas.export_raster()?;
        Ok((png, scene))
    }

    /// Decode-independent entry point: grid, draw, encode, describe.
    #[instrument(skip_all, fields(profile = %doc.profile, counters = doc.counters.len()))]
    pub fn render_document(&self, doc: &ObservationDocument) -> HeatmapResult<RenderedHeatmap> {
        let start = Instant::now();

        let grid = Grid::build(doc)?;
        debug!(
            rows = grid.n_rows(),
            cols = grid.n_cols(),
            masked = grid.mask().masked_count(),
            "Built grid"
        );

        let (png, scene) = self.render(&grid, &doc.title())?;
        let alt_text = describe(&grid);

        info!(
            width = scene.width,
            height = scene.height,
            bytes = png.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered heatmap"
        );

        Ok(RenderedHeatmap {
            png,
            width: scene.width,
            height: scene.height,
            alt_text,
        })
    }
}
