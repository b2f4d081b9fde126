//! commute-day — the reference EV charging-demand run.
//!
//! Builds a fleet of 30 000 commuting EVs, lets them share one public
//! station with 200 slots while at work, and records the aggregate home and
//! public charging demand from midnight to 23:59.  Fleet statistics and the
//! run report go to stdout; the demand curve, charge events, and fleet
//! parameters are written as CSV to `output/commute-day`.
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-vehicle detail.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use evd_core::SimConfig;
use evd_fleet::{FleetBuilder, ParameterStats, describe};
use evd_output::{CsvWriter, SimOutputObserver};
use evd_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/commute-day";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = SimConfig::default();
    println!("=== commute-day — EV charging demand ===");
    println!(
        "Vehicles: {}  |  Public slots: {}  |  Horizon: {}  |  Seed: {}",
        config.fleet_size, config.station_capacity, config.horizon, config.seed
    );
    println!();

    // 1. Fleet.
    let t0 = Instant::now();
    let fleet = FleetBuilder::new(config.fleet_size, config.seed)
        .build()
        .context("building fleet")?;
    info!(
        accepted = fleet.len(),
        rejected = fleet.rejected,
        elapsed_s = t0.elapsed().as_secs_f64(),
        "fleet ready"
    );
    print_stats(&describe(&fleet));
    println!();

    // 2. Sim.
    let mut sim = SimBuilder::new(config, fleet).build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);
    obs.write_fleet(&sim.fleet);

    // 4. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("{report}");
    println!();
    println!("  demand.csv        : {} rows", sim.ctx.ledger.len());
    println!("  charge_events.csv : {} rows", report.counters.charge_starts + report.counters.charge_stops);
    println!("  fleet.csv         : {} rows", sim.fleet.len());

    Ok(())
}

fn print_stats(stats: &[ParameterStats]) {
    println!("{:<38} {:>10} {:>10} {:>10}", "Parameter", "min", "max", "mean");
    println!("{}", "-".repeat(71));
    for s in stats {
        println!("{:<38} {:>10.2} {:>10.2} {:>10.2}", s.name, s.min, s.max, s.mean);
    }
}
