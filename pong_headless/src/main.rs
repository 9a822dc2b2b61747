//! Headless match runner
//!
//! Plays one game to completion (or a tick cap) with no renderer attached.
//! Useful for tuning `Config` values and for soak testing the core.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use pong_core::input::{AutonomousController, HumanRelay, InputStrategy};
use pong_core::{Config, GameMode, GameRng, Side, Simulation};

#[derive(Parser, Debug)]
#[command(name = "pong_headless")]
#[command(about = "Run a pong match without a renderer", long_about = None)]
struct Cli {
    /// JSON file overriding any `Config` fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the puck launch; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Player::Ai)]
    left: Player,

    #[arg(long, value_enum, default_value_t = Player::Ai)]
    right: Player,

    /// Paddles may hold the puck
    #[arg(long, default_value = "false")]
    grabbing: bool,

    /// Moving paddles attract the puck
    #[arg(long, default_value = "false")]
    magnetic: bool,

    /// Stop after this many ticks even if nobody has scored
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Player {
    /// Built-in opponent
    Ai,
    /// Never moves
    Idle,
}

impl Player {
    fn strategy(self, config: &Config) -> Box<dyn InputStrategy> {
        match self {
            Player::Ai => Box::new(AutonomousController::from_config(config)),
            // Nobody writes controls in a headless run, so the relay stays still
            Player::Idle => Box::new(HumanRelay),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    winner: Option<Side>,
    ticks: u64,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref())?;
    let mode = GameMode {
        grabbing: cli.grabbing,
        magnetic: cli.magnetic,
    };
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let left = cli.left.strategy(&config);
    let right = cli.right.strategy(&config);
    let mut sim = Simulation::new(config, mode, left, right, rng)?;

    let report_every = u64::from(sim.config().tick_hz) * 10;
    while !sim.is_over() && sim.ticks() < cli.max_ticks {
        sim.tick()?;
        if sim.ticks() % report_every == 0 {
            let puck = sim.puck()?;
            debug!(
                "tick {}: puck at ({:.1}, {:.1}) speed {:.2}",
                sim.ticks(),
                puck.pos.x,
                puck.pos.y,
                puck.vel.magnitude()
            );
        }
    }

    Ok(Outcome {
        winner: sim.winner(),
        ticks: sim.ticks(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("pong_headless starting: {:?}", cli);

    let outcome = run(&cli)?;
    match outcome.winner {
        Some(side) => {
            info!("{:?} side won after {} ticks", side, outcome.ticks);
            println!("winner: {:?} ({} ticks)", side, outcome.ticks);
        }
        None => {
            warn!("no winner after {} ticks", outcome.ticks);
            println!("no winner ({} ticks)", outcome.ticks);
        }
    }
    Ok(())
}
