//! Simulator - main simulation loop
//!
//! Runs the configured number of walks step by step against one shared,
//! seeded generator and collects the result table.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    SimulationError, SimulationReport, Simulator, SimulatorConfig, WalkSummary,
};
