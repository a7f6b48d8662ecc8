//! Heatmap scene construction.
//!
//! The scene is built in cell-area coordinates (origin at the top-left of
//! the first cell), then shifted so the union of all primitives plus the
//! save padding starts at the image origin. The resulting image is the
//! tight bounding box of what was drawn.

use heatmap_common::{Annotations, Grid, HeatmapError, HeatmapResult, Layout};
use tracing::debug;

use crate::colormap::{Color, ColorScale, Colormap};
use crate::primitives::{
    CellPrimitive, FontWeight, LinePrimitive, Rect, TextOrientation, TextPrimitive,
};
use crate::text::FontSet;

/// Everything a heatmap needs besides fonts.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapInput<'a> {
    pub grid: &'a Grid,
    pub annotations: &'a Annotations,
    pub layout: &'a Layout,
    pub title: &'a str,
}

/// Fully resolved drawing commands for one heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub cells: Vec<CellPrimitive>,
    pub gridlines: Vec<LinePrimitive>,
    pub ticks: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    /// Cell area after trimming.
    pub plot_area: Rect,
}

impl Scene {
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatmapError::RenderError(format!(
                "invalid canvas size: width={}, height={}",
                self.width, self.height
            )));
        }
        for cell in &self.cells {
            cell.validate()?;
        }
        for line in self.gridlines.iter().chain(&self.ticks) {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    /// Text primitive with exactly this content, if any.
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|t| t.text == text)
    }
}

/// Build the scene for a heatmap.
pub fn build_scene(
    input: &HeatmapInput<'_>,
    fonts: &FontSet,
    colormap: Colormap,
) -> HeatmapResult<Scene> {
    let HeatmapInput {
        grid,
        annotations,
        layout,
        title,
    } = *input;

    if grid.n_rows() != layout.rows || grid.n_cols() != layout.cols {
        return Err(HeatmapError::RenderError(format!(
            "layout is {}x{} but grid is {}x{}",
            layout.rows,
            layout.cols,
            grid.n_rows(),
            grid.n_cols()
        )));
    }

    let typo = layout.typography;
    let cell = layout.cell_px();
    let plot = Rect::new(0.0, 0.0, cell * layout.cols as f32, cell * layout.rows as f32);

    let mut cells = Vec::new();
    let mut texts = Vec::new();

    // Cells and annotations. Masked cells get neither.
    let annotation_px = layout.pt_to_px(typo.annotation_size);
    if let Some((min, max)) = grid.value_range() {
        let scale = ColorScale::new(colormap, min, max);
        for (row, col, value) in grid.present_cells() {
            let rect = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
            let color = scale.color(value);
            cells.push(CellPrimitive { rect, color });

            let text = annotations.get(row, col);
            if !text.is_empty() {
                let center = (rect.x + cell / 2.0, rect.y + cell / 2.0);
                texts.push(label(
                    fonts,
                    text,
                    annotation_px,
                    FontWeight::Regular,
                    TextOrientation::Horizontal,
                    color.contrasting_text(),
                    Anchor::Center(center.0, center.1),
                ));
            }
        }
    }

    let gridlines = gridlines(grid, cell, layout.pt_to_px(typo.gridline_width));

    // Ticks: under each column, left of each row.
    let tick_len = layout.pt_to_px(typo.tick_length);
    let tick_width = layout.pt_to_px(typo.tick_width);
    let tick_pad = layout.pt_to_px(typo.tick_pad);
    let tick_px = layout.pt_to_px(typo.tick_label_size);
    let mut ticks = Vec::new();

    let mut x_labels_bottom = plot.bottom() + tick_len;
    for (col, text) in grid.column_labels().iter().enumerate() {
        let x = (col as f32 + 0.5) * cell;
        ticks.push(LinePrimitive::new(
            x,
            plot.bottom(),
            x,
            plot.bottom() + tick_len,
            tick_width,
            Color::black(),
        ));
        let tick_label = label(
            fonts,
            text,
            tick_px,
            FontWeight::Regular,
            TextOrientation::Horizontal,
            Color::black(),
            Anchor::TopCenter(x, plot.bottom() + tick_len + tick_pad),
        );
        x_labels_bottom = x_labels_bottom.max(tick_label.bounds.bottom());
        texts.push(tick_label);
    }

    let mut y_labels_left = plot.x - tick_len;
    for (row, text) in grid.row_labels().iter().enumerate() {
        let y = (row as f32 + 0.5) * cell;
        ticks.push(LinePrimitive::new(
            plot.x - tick_len,
            y,
            plot.x,
            y,
            tick_width,
            Color::black(),
        ));
        // An empty counter name keeps its tick but has no label.
        if text.is_empty() {
            continue;
        }
        let tick_label = label(
            fonts,
            text,
            tick_px,
            FontWeight::Regular,
            TextOrientation::Horizontal,
            Color::black(),
            Anchor::RightCenter(plot.x - tick_len - tick_pad, y),
        );
        y_labels_left = y_labels_left.min(tick_label.bounds.x);
        texts.push(tick_label);
    }

    // Axis labels and title.
    let axis_px = layout.pt_to_px(typo.axis_label_size);
    let axis_pad = layout.pt_to_px(typo.axis_label_pad);
    let profile = grid.profile();
    texts.push(label(
        fonts,
        profile.x_axis_label(),
        axis_px,
        FontWeight::Regular,
        TextOrientation::Horizontal,
        Color::black(),
        Anchor::TopCenter(plot.width / 2.0, x_labels_bottom + axis_pad),
    ));
    texts.push(label(
        fonts,
        profile.y_axis_label(),
        axis_px,
        FontWeight::Regular,
        TextOrientation::Vertical,
        Color::black(),
        Anchor::RightCenter(y_labels_left - axis_pad, plot.height / 2.0),
    ));
    if !title.is_empty() {
        texts.push(label(
            fonts,
            title,
            layout.pt_to_px(typo.title_size),
            FontWeight::Bold,
            TextOrientation::Horizontal,
            Color::black(),
            Anchor::BottomCenter(plot.width / 2.0, plot.y - layout.pt_to_px(typo.title_pad)),
        ));
    }

    // Trim to the tight bounding box plus padding.
    let content = texts
        .iter()
        .map(|t| t.bounds)
        .chain(ticks.iter().chain(&gridlines).map(LinePrimitive::bounds))
        .fold(plot, |acc, r| acc.union(&r));
    let pad = layout.save_pad_px();
    let dx = (pad - content.x).round();
    let dy = (pad - content.y).round();
    let width = (content.width + 2.0 * pad).ceil() as u32;
    let height = (content.height + 2.0 * pad).ceil() as u32;

    let scene = Scene {
        width,
        height,
        background: Color::white(),
        cells: cells
            .into_iter()
            .map(|c| CellPrimitive {
                rect: c.rect.translate(dx, dy),
                color: c.color,
            })
            .collect(),
        gridlines: gridlines.iter().map(|l| l.translate(dx, dy)).collect(),
        ticks: ticks.iter().map(|l| l.translate(dx, dy)).collect(),
        texts: texts.iter().map(|t| t.translate(dx, dy)).collect(),
        plot_area: plot.translate(dx, dy),
    };

    debug!(
        width = scene.width,
        height = scene.height,
        cells = scene.cells.len(),
        texts = scene.texts.len(),
        "Built heatmap scene"
    );

    scene.validate()?;
    Ok(scene)
}

/// Gridlines around every unmasked cell. Adjacent segments on the same
/// boundary are merged into one line.
fn gridlines(grid: &Grid, cell: f32, width: f32) -> Vec<LinePrimitive> {
    let rows = grid.n_rows();
    let cols = grid.n_cols();
    let mask = grid.mask();
    let shown = |row: usize, col: usize| !mask.is_masked(row, col);

    let mut lines = Vec::new();

    // Horizontal boundary `b` lies between rows b-1 and b.
    for b in 0..=rows {
        let mut run: Option<usize> = None;
        for col in 0..=cols {
            let drawn = col < cols
                && ((b > 0 && shown(b - 1, col)) || (b < rows && shown(b, col)));
            match (drawn, run) {
                (true, None) => run = Some(col),
                (false, Some(start)) => {
                    let y = b as f32 * cell;
                    lines.push(LinePrimitive::new(
                        start as f32 * cell,
                        y,
                        col as f32 * cell,
                        y,
                        width,
                        Color::gray(),
                    ));
                    run = None;
                }
                _ => {}
            }
        }
    }

    // Vertical boundary `b` lies between columns b-1 and b.
    for b in 0..=cols {
        let mut run: Option<usize> = None;
        for row in 0..=rows {
            let drawn = row < rows
                && ((b > 0 && shown(row, b - 1)) || (b < cols && shown(row, b)));
            match (drawn, run) {
                (true, None) => run = Some(row),
                (false, Some(start)) => {
                    let x = b as f32 * cell;
                    lines.push(LinePrimitive::new(
                        x,
                        start as f32 * cell,
                        x,
                        row as f32 * cell,
                        width,
                        Color::gray(),
                    ));
                    run = None;
                }
                _ => {}
            }
        }
    }

    lines
}

/// Reference point of a label.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Center(f32, f32),
    TopCenter(f32, f32),
    BottomCenter(f32, f32),
    RightCenter(f32, f32),
}

fn label(
    fonts: &FontSet,
    text: &str,
    size_px: f32,
    weight: FontWeight,
    orientation: TextOrientation,
    color: Color,
    anchor: Anchor,
) -> TextPrimitive {
    let extent = fonts.measure(text, size_px, weight);
    let (w, h) = match orientation {
        TextOrientation::Horizontal => (extent.width, extent.height),
        TextOrientation::Vertical => (extent.height, extent.width),
    };
    let (x, y) = match anchor {
        Anchor::Center(x, y) => (x - w / 2.0, y - h / 2.0),
        Anchor::TopCenter(x, y) => (x - w / 2.0, y),
        Anchor::BottomCenter(x, y) => (x - w / 2.0, y - h),
        Anchor::RightCenter(x, y) => (x - w, y - h / 2.0),
    };
    TextPrimitive {
        text: text.to_string(),
        bounds: Rect::new(x, y, w, h),
        font_size_px: size_px,
        weight,
        orientation,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_common::{BucketObservation, CounterRecord, ObservationDocument, Profile};

    fn grid_of(counters: Vec<CounterRecord>) -> Grid {
        Grid::build(&ObservationDocument {
            profile: Profile::Week,
            label: "Jan 7".into(),
            counters,
        })
        .unwrap()
    }

    #[test]
    fn test_gridlines_skip_masked_cells() {
        // One row, only Sun reported: a single cell outline.
        let grid = grid_of(vec![CounterRecord::observed(
            "A",
            vec![BucketObservation::weekday("Sun", 1.0)],
        )]);
        let lines = gridlines(&grid, 10.0, 1.0);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.x1.max(l.x2) <= 10.0));
    }

    #[test]
    fn test_gridlines_merge_runs() {
        let grid = grid_of(vec![CounterRecord::observed(
            "A",
            ["Sun", "Mon", "Tue"]
                .iter()
                .map(|d| BucketObservation::weekday(*d, 2.0))
                .collect(),
        )]);
        let lines = gridlines(&grid, 10.0, 1.0);
        let horizontal: Vec<_> = lines.iter().filter(|l| l.y1 == l.y2).collect();
        assert_eq!(horizontal.len(), 2);
        assert!(horizontal.iter().all(|l| l.x1 == 0.0 && l.x2 == 30.0));
        assert_eq!(lines.len() - horizontal.len(), 4);
    }

    #[test]
    fn test_gridlines_none_for_missing_row() {
        let grid = grid_of(vec![CounterRecord::missing("A")]);
        assert!(gridlines(&grid, 10.0, 1.0).is_empty());
    }
}
