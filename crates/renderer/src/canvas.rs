//! Drawing backend seam.
//!
//! A [`Scene`] is painted onto any [`Canvas`]. [`RasterCanvas`] produces the
//! PNG; [`RecordingCanvas`] keeps the calls it received, which makes scene
//! painting testable without looking at pixels.
//!
//! [`RasterCanvas`]: crate::raster::RasterCanvas

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::trace;

use crate::primitives::{CellPrimitive, LinePrimitive, TextPrimitive};
use crate::scene::Scene;

/// Minimal drawing surface for heatmaps.
pub trait Canvas {
    fn draw_cell(&mut self, cell: &CellPrimitive) -> HeatmapResult<()>;

    fn draw_gridline(&mut self, line: &LinePrimitive) -> HeatmapResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> HeatmapResult<()>;

    /// Encode whatever has been drawn so far.
    fn export_raster(&mut self) -> HeatmapResult<Vec<u8>>;
}

/// Paint a scene: cells first, then gridlines and ticks, then text.
pub fn paint_scene(scene: &Scene, canvas: &mut dyn Canvas) -> HeatmapResult<()> {
    scene.validate()?;

    for cell in &scene.cells {
        canvas.draw_cell(cell)?;
    }
    for line in scene.gridlines.iter().chain(&scene.ticks) {
        canvas.draw_gridline(line)?;
    }
    for text in &scene.texts {
        canvas.draw_text(text)?;
    }

    trace!(
        cells = scene.cells.len(),
        lines = scene.gridlines.len() + scene.ticks.len(),
        texts = scene.texts.len(),
        "Painted scene"
    );
    Ok(())
}

/// One call received by a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Cell(CellPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

/// Canvas that records draw calls and exports nothing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    exported: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellPrimitive> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Cell(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.exported = false;
    }

    fn ensure_open(&self) -> HeatmapResult<()> {
        if self.exported {
            return Err(HeatmapError::RenderError(
                "canvas already exported".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_cell(&mut self, cell: &CellPrimitive) -> HeatmapResult<()> {
        self.ensure_open()?;
        cell.validate()?;
        self.commands.push(DrawCommand::Cell(*cell));
        Ok(())
    }

    fn draw_gridline(&mut self, line: &LinePrimitive) -> HeatmapResult<()> {
        self.ensure_open()?;
        line.validate()?;
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> HeatmapResult<()> {
        self.ensure_open()?;
        text.validate()?;
        self.commands.push(DrawCommand::Text(text.clone()));
        Ok(())
    }

    fn export_raster(&mut self) -> HeatmapResult<Vec<u8>> {
        self.ensure_open()?;
        self.exported = true;
        Ok(Vec::new())
    }
}
