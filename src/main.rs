//! Minimal Runner headless driver
//!
//! Plays the game without a window: feeds synthetic frame timestamps into
//! the runner, presses jump on a schedule or via the autopilot, restarts
//! after each game over and reports the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minimal_runner::persistence::{JsonFileStore, MemoryStore, ScoreStore};
use minimal_runner::sim::{Autopilot, GameEvent, GamePhase};
use minimal_runner::{Runner, Snapshot, TickInput, Tuning};

#[derive(Parser)]
#[command(name = "minimal-runner")]
#[command(about = "Run the obstacle runner simulation headless", long_about = None)]
#[command(version)]
struct Cli {
    /// RNG seed for obstacle generation
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated wall-clock seconds to play
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// Host frame rate to emulate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// JSON file overriding game balance
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// JSON file holding the best score (in-memory when omitted)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Let the demo controller play
    #[arg(long)]
    autopilot: bool,

    /// Press jump every N seconds (ignored with --autopilot)
    #[arg(long)]
    jump_every: Option<f64>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Totals over a headless session
#[derive(Debug, Default)]
struct Summary {
    runs: u32,
    scores: Vec<u64>,
    new_highs: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tuning = match &cli.tuning {
        Some(path) => {
            Tuning::load(path).with_context(|| format!("loading tuning {}", path.display()))?
        }
        None => Tuning::default(),
    };
    anyhow::ensure!(cli.fps > 0.0, "--fps must be positive");

    log::info!("Minimal Runner (headless) starting with seed {}", cli.seed);

    match &cli.store {
        Some(path) => {
            let store = JsonFileStore::new(path);
            log::info!("Best score kept in {}", store.path().display());
            play(&cli, tuning, store)
        }
        None => play(&cli, tuning, MemoryStore::new()),
    }
}

fn play<S: ScoreStore>(cli: &Cli, tuning: Tuning, store: S) -> Result<()> {
    let mut runner = Runner::new(tuning, store, cli.seed);
    let pilot = Autopilot::default();
    let frame = 1.0 / cli.fps;
    let frames = (cli.seconds * cli.fps).ceil() as u64;

    let mut summary = Summary::default();
    let mut next_jump = 0.0;
    let mut snapshot: Option<Snapshot> = None;

    for i in 0..=frames {
        let now = i as f64 * frame;
        let session = runner.session();
        let mut input = TickInput::default();

        match session.phase {
            GamePhase::Over => input.restart = true,
            _ if cli.autopilot => input.jump = pilot.decide(session),
            GamePhase::NotStarted => input.jump = true,
            GamePhase::Running => {
                if let Some(every) = cli.jump_every {
                    if now >= next_jump {
                        input.jump = true;
                        next_jump = now + every;
                    }
                }
            }
        }

        snapshot = Some(runner.tick(now, &input));

        for event in runner.events() {
            match *event {
                GameEvent::Started => summary.runs += 1,
                GameEvent::GameOver {
                    score, new_high, ..
                } => {
                    summary.scores.push(score);
                    if new_high {
                        summary.new_highs += 1;
                    }
                }
                _ => {}
            }
        }
    }

    let snapshot = snapshot.context("no frames simulated")?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let mean = if summary.scores.is_empty() {
            0.0
        } else {
            summary.scores.iter().sum::<u64>() as f64 / summary.scores.len() as f64
        };
        println!("Runs started:    {}", summary.runs);
        println!("Runs finished:   {}", summary.scores.len());
        println!("Mean score:      {mean:.1}");
        println!("New high scores: {}", summary.new_highs);
        println!("Best score:      {}", snapshot.best);
        println!("Final phase:     {:?} (score {})", snapshot.phase, snapshot.display_score());
    }
    Ok(())
}
