//! Headless Pong runner
//!
//! Plays a match from a key script and logs what a screen would show.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client::{LocalGame, Script, ScriptedInput};
use game_core::{Config, MatchState};

#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Run a two-player Pong match without a window", long_about = None)]
struct Cli {
    /// JSON config overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON key script; defaults to pressing space once
    #[arg(long)]
    script: Option<PathBuf>,

    /// RNG seed for puck spawns
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum wall-clock seconds to simulate
    #[arg(long, default_value_t = 600.0)]
    seconds: f32,

    /// Rendered frames per second (variable-rate phase)
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::new(),
    };
    let script = match &cli.script {
        Some(path) => {
            Script::load(path).with_context(|| format!("loading script {}", path.display()))?
        }
        None => Script::press_start(),
    };

    log::info!("Pong starting (seed {}, {} fps)", cli.seed, cli.fps);

    let mut game = LocalGame::new(config, cli.seed, Box::new(ScriptedInput::new(script)))
        .context("building match")?;
    let frames = game.run(cli.seconds, cli.fps);

    let hud = game.hud.borrow();
    log::info!(
        "{} frames, {:.1}s simulated, {} paddle hits, {} wall hits",
        frames,
        game.controller.time().now,
        hud.paddle_hits,
        hud.boundary_hits
    );

    match (game.controller.state(), game.controller.winner()) {
        (MatchState::GameOver, Some(winner)) => {
            println!("Player {} won {}", winner.number(), hud.score_line())
        }
        _ => println!("No winner yet, score {}", hud.score_line()),
    }

    Ok(())
}
