//! Walk Simulator Core - Rust Engine
//!
//! Deterministic random-walk simulation with table collection and chart
//! rendering.
//!
//! # Architecture
//!
//! - **models**: Domain types (Walk, WalkTable)
//! - **steps**: The stochastic step rule (die roll -> movement)
//! - **simulator**: Main simulation loop
//! - **render**: Line-chart rendering (SVG)
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All positions are i64 and never negative (downward moves clamp at 0)
//! 2. All randomness is deterministic (seeded RNG, fixed draw order)
//! 3. The walk table is rectangular: every row has the same length

// Module declarations
pub mod models;
pub mod render;
pub mod rng;
pub mod simulator;
pub mod steps;

// Re-exports for convenience
pub use models::{
    table::{TableError, WalkTable},
    walk::{Walk, WalkError},
};
pub use render::{cross_section_lines_svg, line_chart_svg, walk_lines_svg, RenderError};
pub use rng::RngManager;
pub use simulator::{
    SimulationError, SimulationReport, Simulator, SimulatorConfig, WalkSummary,
};
pub use steps::StepMove;
