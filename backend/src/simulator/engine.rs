//! Simulation engine
//!
//! Main loop integrating all components:
//! - Step generation (die-roll rule, fixed draw order)
//! - Walk collection (rectangular result table)
//! - Per-walk summaries (final/peak position, clamp and surge counts)
//!
//! # Architecture
//!
//! ```text
//! For each walk w:
//!   start at the origin
//!   For each step s:
//!     1. Draw a movement from the shared RNG
//!     2. Apply it to the current position (clamped at 0)
//!     3. Record the new position
//!   Summarize the finished walk
//! Collect all walks into a WalkTable
//! ```
//!
//! Walks are generated outer-loop-by-walk, inner-loop-by-step against a
//! single generator, so the entire draw sequence is a pure function of the
//! seed.
//!
//! # Example
//!
//! ```rust
//! use walk_simulator_core_rs::{Simulator, SimulatorConfig};
//!
//! let mut simulator = Simulator::new(SimulatorConfig::default()).unwrap();
//! let report = simulator.run().unwrap();
//!
//! assert_eq!(report.table.shape(), (10, 101));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::table::{TableError, WalkTable};
use crate::models::walk::{Walk, WalkError};
use crate::rng::RngManager;
use crate::steps::{self, StepMove};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulator configuration
///
/// The canonical run is the `Default`: 10 walks of 100 steps each, seed 123.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Number of independent walks to simulate
    pub num_walks: usize,

    /// Number of steps per walk (positions per walk = num_steps + 1)
    pub num_steps: usize,

    /// RNG seed for deterministic simulation
    pub rng_seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            num_walks: 10,
            num_steps: 100,
            rng_seed: 123,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

// ============================================================================
// Results
// ============================================================================

/// Per-walk summary produced alongside the table
///
/// Not part of the printed output; logged at debug level and used by tests
/// to cross-check the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSummary {
    /// Index of the walk in generation order
    pub walk_index: usize,

    /// Position after the final step
    pub final_position: i64,

    /// Highest position reached at any step
    pub peak_position: i64,

    /// Number of downward moves taken at the origin (clamp engaged)
    pub clamped_steps: usize,

    /// Number of steps that rolled a 6 (bonus movement)
    pub surge_steps: usize,
}

/// Result of a full simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Rows = walks, columns = time steps
    pub table: WalkTable,

    /// One summary per walk, in generation order
    pub summaries: Vec<WalkSummary>,
}

// ============================================================================
// Simulator
// ============================================================================

/// The walk simulator
///
/// Owns the configuration and the single shared generator. Each call to
/// [`Simulator::run`] continues the generator sequence; build a fresh
/// simulator to reproduce a run from its seed.
#[derive(Debug)]
pub struct Simulator {
    /// Run configuration
    config: SimulatorConfig,

    /// The one generator all randomness flows through
    rng: RngManager,
}

impl Simulator {
    /// Create a new simulator from a validated configuration
    ///
    /// # Returns
    /// - `Ok(Simulator)` on success
    /// - `Err(SimulationError::InvalidConfig)` if a count is zero
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;
        let rng = RngManager::new(config.rng_seed);
        Ok(Self { config, rng })
    }

    fn validate_config(config: &SimulatorConfig) -> Result<(), SimulationError> {
        if config.num_walks == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_walks must be positive".to_string(),
            ));
        }
        if config.num_steps == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_steps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The active configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Current generator state (for replay verification)
    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }

    /// Run the full simulation and collect the result table
    ///
    /// Walks are generated one after the other against the shared
    /// generator; within a walk, steps are generated in order. A roll of 6
    /// consumes its bonus draw immediately, before the next step.
    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        info!(
            num_walks = self.config.num_walks,
            num_steps = self.config.num_steps,
            seed = self.config.rng_seed,
            "starting simulation"
        );

        let mut walks = Vec::with_capacity(self.config.num_walks);
        let mut summaries = Vec::with_capacity(self.config.num_walks);

        for walk_index in 0..self.config.num_walks {
            let mut walk = Walk::start();
            let mut peak_position = 0i64;
            let mut clamped_steps = 0usize;
            let mut surge_steps = 0usize;

            for _ in 0..self.config.num_steps {
                let position = walk.final_position();
                let mv = steps::draw_move(&mut self.rng);

                match mv {
                    StepMove::Down if position == 0 => clamped_steps += 1,
                    StepMove::Surge { .. } => surge_steps += 1,
                    _ => {}
                }

                let next = steps::apply(position, mv);
                peak_position = peak_position.max(next);
                walk.record(next)?;
            }

            debug!(
                walk_index,
                final_position = walk.final_position(),
                peak_position,
                clamped_steps,
                surge_steps,
                "walk complete"
            );

            summaries.push(WalkSummary {
                walk_index,
                final_position: walk.final_position(),
                peak_position,
                clamped_steps,
                surge_steps,
            });
            walks.push(walk);
        }

        let table = WalkTable::from_walks(&walks)?;
        info!(
            rows = table.num_rows(),
            cols = table.num_cols(),
            digest = %table.digest(),
            "simulation complete"
        );

        Ok(SimulationReport { table, summaries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_walks() {
        let config = SimulatorConfig {
            num_walks: 0,
            ..SimulatorConfig::default()
        };
        let err = Simulator::new(config).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_new_rejects_zero_steps() {
        let config = SimulatorConfig {
            num_steps: 0,
            ..SimulatorConfig::default()
        };
        let err = Simulator::new(config).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_default_config_is_canonical_run() {
        let config = SimulatorConfig::default();
        assert_eq!(config.num_walks, 10);
        assert_eq!(config.num_steps, 100);
        assert_eq!(config.rng_seed, 123);
    }

    #[test]
    fn test_run_advances_rng_state() {
        let mut simulator = Simulator::new(SimulatorConfig::default()).unwrap();
        let before = simulator.rng_state();
        simulator.run().unwrap();
        assert_ne!(simulator.rng_state(), before);
    }

    #[test]
    fn test_summaries_match_table() {
        let mut simulator = Simulator::new(SimulatorConfig::default()).unwrap();
        let report = simulator.run().unwrap();

        assert_eq!(report.summaries.len(), report.table.num_rows());
        for summary in &report.summaries {
            let row = report.table.row(summary.walk_index).unwrap();
            assert_eq!(summary.final_position, *row.last().unwrap());
            assert_eq!(summary.peak_position, *row.iter().max().unwrap());
            assert!(summary.peak_position >= summary.final_position);
        }
    }
}
