//! SVG line-chart rendering of walk tables.
//!
//! Two figures exist for one simulation run:
//!
//! - the walk view: one line per walk, x = step index
//! - the cross-section view of the transposed table: one line per step
//!   index, connecting the walks' positions at that step
//!
//! Both are produced by the same row-lines renderer; the cross-section
//! figure just renders the transposed table. Charts are built in memory as
//! SVG documents; callers decide whether a figure is written anywhere or
//! dropped.

use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::models::table::WalkTable;

/// Default figure size in pixels
const FIGURE_SIZE: (u32, u32) = (1024, 768);

/// Errors that can occur during chart rendering
///
/// Backend failures are environmental; they are wrapped and propagated,
/// never recovered from.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing backend error: {0}")]
    Backend(String),
}

/// Render each row of the table as one line into an SVG document
///
/// X axis spans the column indices, y axis spans from 0 to the largest
/// value in the table.
///
/// # Example
/// ```
/// use walk_simulator_core_rs::{line_chart_svg, WalkTable};
///
/// let table = WalkTable::from_rows(vec![vec![0, 1, 2], vec![0, 3, 4]]).unwrap();
/// let svg = line_chart_svg(&table, "walks", (640, 480)).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn line_chart_svg(
    table: &WalkTable,
    caption: &str,
    size: (u32, u32),
) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        let x_max = (table.num_cols() as i64 - 1).max(1);
        let y_max = table
            .rows()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(0..x_max, 0..y_max)
            .map_err(backend_err)?;

        chart.configure_mesh().draw().map_err(backend_err)?;

        for (idx, row) in table.rows().enumerate() {
            let color = Palette99::pick(idx);
            chart
                .draw_series(LineSeries::new(
                    row.iter().enumerate().map(|(col, &value)| (col as i64, value)),
                    &color,
                ))
                .map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
    }

    debug!(caption, lines = table.num_rows(), "rendered figure");
    Ok(svg)
}

/// Figure 1: one line per walk over the step index
pub fn walk_lines_svg(table: &WalkTable) -> Result<String, RenderError> {
    line_chart_svg(table, "Random walks", FIGURE_SIZE)
}

/// Figure 2: the transposed table, one line per step index across walks
pub fn cross_section_lines_svg(table: &WalkTable) -> Result<String, RenderError> {
    line_chart_svg(&table.transposed(), "Positions across walks, per step", FIGURE_SIZE)
}

fn backend_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}
