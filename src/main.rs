//! Headless runner for the orbital network simulator.
//!
//! Loads a scene JSON (and an optional `config.toml` next to it), builds the
//! simulation, and drives it at a fixed tick cadence, logging packet traffic
//! and periodic stats. Rendering is a separate concern; this binary is the
//! external tick driver the core exposes its hooks to.

use anyhow::{Context, Result, bail};
use env_logger::Builder;
use log::{LevelFilter, info};
use std::io::Write;
use std::thread;
use std::time::Duration;

mod common;
mod simulation;

use common::RunnerConfig;
use common::scene::load_scene;
use simulation::Simulation;

fn init_logging() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <scene.json>", args[0]);
    }
    let scene_path = &args[1];

    let scene =
        load_scene(scene_path).with_context(|| format!("failed to load scene {}", scene_path))?;

    let config_path = RunnerConfig::config_path_from_scene(scene_path);
    let runner = if config_path.exists() {
        RunnerConfig::load(&config_path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to load {}", config_path.display()))?
    } else {
        info!(
            "No config file at {}, using defaults.",
            config_path.display()
        );
        RunnerConfig::default()
    };

    let seed = runner.seed.unwrap_or_else(rand::random::<u64>);
    let mut sim = Simulation::new(&scene, runner.speed_modifiers.clone(), seed);
    info!(
        "Simulation started. Seed: {}, speed: {}x",
        seed,
        sim.speed_modifier()
    );
    let delay = Duration::from_millis(runner.tick_delay_ms);

    let mut tick: u64 = 0;
    loop {
        sim.advance_tick();
        tick += 1;

        if runner.stats_interval_ticks > 0 && tick % runner.stats_interval_ticks == 0 {
            let stats = sim.stats();
            info!(
                "tick {}: {} packets in flight, {} MST edges, {} generated, {} arrived, {} routing failures",
                tick,
                sim.packets().len(),
                sim.mst_edges().len(),
                stats.packets_generated,
                stats.packets_arrived,
                stats.routing_failures
            );
        }

        if let Some(limit) = runner.ticks {
            if tick >= limit {
                break;
            }
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    let stats = sim.stats();
    info!(
        "Simulation finished after {} ticks ({:.1} time units): {} packets generated, {} arrived, {} routing failures, {} MST recalculations.",
        tick,
        sim.sim_time(),
        stats.packets_generated,
        stats.packets_arrived,
        stats.routing_failures,
        stats.mst_recalculations
    );

    Ok(())
}
