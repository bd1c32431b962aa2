use ball_simulation::ScenarioConfig;

use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

/// Runs a scenario headless and prints momentum/energy before and after.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; bare names are looked up in the crate's `scenarios/` directory.
    #[arg(short, long, default_value = "pool.yaml")]
    file: PathBuf,

    /// Overrides the scenario's frame count.
    #[arg(short = 'n', long)]
    frames: Option<usize>,
}

fn scenario_path(file: PathBuf) -> PathBuf {
    if file.exists() {
        return file;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    let scenario = ScenarioConfig::from_path(&scenario_path(args.file))?;
    let frames = args.frames.unwrap_or(scenario.frames);
    let mut sim = scenario.build()?;

    let momentum = sim.total_momentum();
    println!(
        "start: {} bodies, momentum ({:.6}, {:.6}), energy {:.6}",
        sim.bodies.len(),
        momentum.x,
        momentum.y,
        sim.kinetic_energy()
    );

    for _ in 0..frames {
        sim.step(scenario.frame_ms);
    }

    let momentum = sim.total_momentum();
    println!(
        "after {} frames ({:.3}s): momentum ({:.6}, {:.6}), energy {:.6}",
        sim.frame,
        sim.frame as f64 * scenario.frame_ms / 1000.0,
        momentum.x,
        momentum.y,
        sim.kinetic_energy()
    );
    for body in &sim.bodies {
        log::debug!(
            "body {}: pos ({:.3}, {:.3}) vel ({:.3}, {:.3})",
            body.id,
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }

    Ok(())
}
