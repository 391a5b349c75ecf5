use anyhow::Result;
use log::{debug, error, info, trace};
use std::fs::File;
use std::time::Instant;

use flocking_engine::{Flock, NullSurface, SimulationConfig, Snapshot};

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    info!("Starting flocking engine (headless)...");

    // --- Load Configuration ---
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = SimulationConfig::load(&config_path)?;
    debug!("Configuration: {:#?}", config);

    // --- Initialize Flock ---
    let mut flock = Flock::new(&config)?;
    info!(
        "Initialized flock with {} boids in a {}x{} world.",
        flock.boids().len(),
        flock.world().width,
        flock.world().height
    );

    let total_ticks = config.run.ticks;
    let snapshot_interval = config.run.snapshot_interval.max(1);
    info!(
        "Running {} ticks, recording a snapshot every {} ticks.",
        total_ticks, snapshot_interval
    );

    // --- Simulation Loop ---
    let mut surface = NullSurface;
    let mut snapshots: Vec<Snapshot> = vec![flock.snapshot()];
    let start_time = Instant::now();
    let mut previous_print_time = start_time;

    for tick in 0..total_ticks {
        let tick_start = Instant::now();
        flock.tick(&mut surface);
        let tick_duration = tick_start.elapsed();

        let is_record_tick = (tick + 1) % snapshot_interval == 0;
        let is_last_tick = tick == total_ticks.saturating_sub(1);
        if is_record_tick || is_last_tick {
            snapshots.push(flock.snapshot());
        }

        // Print status periodically
        let now = Instant::now();
        let should_print_status = now.duration_since(previous_print_time).as_secs_f64() >= 5.0;
        if should_print_status || is_record_tick || is_last_tick {
            let latest = snapshots.last().map(|s| s.average_heading).unwrap_or(0.0);
            info!(
                "Tick [{}/{}] | Boids: {} | Mean heading: {:.3} rad | Tick time: {:6.2} ms | Elapsed: {:.2} s",
                tick + 1,
                total_ticks,
                flock.boids().len(),
                latest,
                tick_duration.as_secs_f64() * 1000.0,
                start_time.elapsed().as_secs_f64()
            );
            previous_print_time = now;
        } else {
            trace!(
                "Tick [{}/{}] completed in {:.2} ms",
                tick + 1,
                total_ticks,
                tick_duration.as_secs_f64() * 1000.0
            );
        }
    }

    let total_duration = start_time.elapsed();
    info!(
        "Simulation finished: {} ticks in {:.3} seconds.",
        total_ticks,
        total_duration.as_secs_f64()
    );

    // --- Save Recorded Snapshots ---
    if let Some(path) = &config.run.output_path {
        match File::create(path) {
            Ok(file) => match serde_json::to_writer(file, &snapshots) {
                Ok(()) => info!("{} snapshots saved to {}", snapshots.len(), path),
                Err(e) => error!("Error serializing snapshots to JSON: {}", e),
            },
            Err(e) => error!("Error creating snapshot file '{}': {}", path, e),
        }
    } else {
        info!("No output path configured; skipping snapshot export.");
    }

    info!("Done.");
    Ok(())
}
