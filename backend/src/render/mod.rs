//! Chart rendering
//!
//! Renders a walk table as SVG line charts. The renderer does no
//! computation beyond the transpose: each row of the table it is handed
//! becomes one line, x = column index, y = cell value.

mod chart;

pub use chart::{cross_section_lines_svg, line_chart_svg, walk_lines_svg, RenderError};
