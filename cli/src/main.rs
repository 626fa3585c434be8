//! Walk simulator CLI.
//!
//! Runs the canonical simulation end to end: 10 walks of 100 steps from
//! seed 123, printed as the raw table and its transpose, with the
//! cross-section figure written to the working directory. There are no
//! flags; the run is fixed by the constants below.

use anyhow::{Context, Result};
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walk_simulator_core_rs::{render, Simulator, SimulatorConfig};

/// Number of independent walks
const WALK_COUNT: usize = 10;

/// Steps per walk
const STEP_COUNT: usize = 100;

/// Fixed seed; the whole run is reproducible from this value
const RNG_SEED: u64 = 123;

/// Output path for the displayed figure
const OUTPUT_SVG: &str = "walk_cross_sections.svg";

fn main() -> Result<()> {
    init_tracing();

    let config = SimulatorConfig {
        num_walks: WALK_COUNT,
        num_steps: STEP_COUNT,
        rng_seed: RNG_SEED,
    };
    let mut simulator = Simulator::new(config).context("invalid simulator configuration")?;
    let report = simulator.run().context("simulation failed")?;
    let table = report.table;

    // First figure: one line per walk. Built and then dropped; only the
    // cross-section figure is kept as an artifact.
    let _discarded = render::walk_lines_svg(&table).context("failed to render walk figure")?;

    println!("{table}");
    println!();
    println!("{}", table.transposed());

    let svg =
        render::cross_section_lines_svg(&table).context("failed to render cross-section figure")?;
    fs::write(OUTPUT_SVG, &svg).with_context(|| format!("failed to write {OUTPUT_SVG}"))?;
    info!(path = OUTPUT_SVG, digest = %table.digest(), "wrote cross-section figure");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
