//! Heatmap rendering for counter occupancy grids.
//!
//! The pipeline is split in two halves:
//! - [`scene`] turns a grid into positioned primitives (cells, gridlines,
//!   ticks, labels) in pixel space
//! - a [`canvas::Canvas`] draws those primitives; [`raster::RasterCanvas`]
//!   rasterizes them and encodes a PNG via [`png`]

pub mod canvas;
pub mod colormap;
pub mod heatmap;
pub mod png;
pub mod primitives;
pub mod raster;
pub mod scene;
pub mod text;

pub use canvas::{paint_scene, Canvas, DrawCommand, RecordingCanvas};
pub use colormap::{Color, ColorScale, Colormap};
pub use heatmap::{HeatmapRenderer, RenderedHeatmap};
pub use primitives::{CellPrimitive, FontWeight, LinePrimitive, Rect, TextOrientation, TextPrimitive};
pub use raster::RasterCanvas;
pub use scene::{build_scene, HeatmapInput, Scene};
pub use text::{FontSet, TextExtent};
