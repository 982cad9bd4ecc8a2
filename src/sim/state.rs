//! Session state and lifecycle
//!
//! One `Session` lives for the whole process and is reset in place between
//! runs. Only the best score survives a reset.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::difficulty::Difficulty;
use super::obstacle::{Obstacle, Spawner};
use super::particles::Particles;
use super::rng::{RandomSource, seeded};
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Actor hit an obstacle; waiting for restart
    Over,
}

/// Things the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    /// Actor touched down after being airborne
    Landed { x: f32, y: f32 },
    /// Actor hit an obstacle. `best` is the value to persist.
    GameOver { score: u64, best: u64, new_high: bool },
    /// Session was reset after a game over
    Reset,
}

/// The whole game
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Best floored score seen so far (survives resets)
    pub best: u64,
    pub difficulty: Difficulty,
    pub spawner: Spawner,
    pub actor: Actor,
    /// Spawn order, which is also left-to-right order
    pub obstacles: Vec<Obstacle>,
    pub particles: Particles,
    /// Host should offer a restart
    pub show_restart: bool,
    /// Fixed steps simulated while running
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl Session<Pcg32> {
    /// Create a session driven by a seeded PCG stream
    pub fn new(tuning: Tuning, best: u64, seed: u64) -> Self {
        Self::with_rng(tuning, best, seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session with an injected random source
    pub fn with_rng(tuning: Tuning, best: u64, mut rng: R) -> Self {
        let spawner = Spawner::new(&tuning, &mut rng);
        let particles = Particles::new(tuning.max_particles);
        Self {
            phase: GamePhase::NotStarted,
            best,
            difficulty: Difficulty::new(&tuning),
            spawner,
            actor: Actor::new(&tuning),
            obstacles: Vec::new(),
            particles,
            show_restart: false,
            time_ticks: 0,
            events: Vec::new(),
            rng,
            tuning,
        }
    }

    /// Current fractional score
    pub fn score(&self) -> f64 {
        self.difficulty.score
    }

    /// Current world speed
    pub fn speed(&self) -> f32 {
        self.difficulty.speed
    }

    /// Jump input. Starts the run when idle; ignored once over.
    pub fn request_jump(&mut self) {
        match self.phase {
            GamePhase::NotStarted => {
                self.start();
                self.actor.request_jump();
            }
            GamePhase::Running => self.actor.request_jump(),
            GamePhase::Over => {}
        }
    }

    /// Begin a run from the idle phase
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started");
    }

    /// Restart input. Only honoured after a game over.
    pub fn request_restart(&mut self) -> bool {
        if self.phase != GamePhase::Over {
            return false;
        }
        self.reset();
        true
    }

    /// Return everything but the best score to its initial value
    fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.difficulty = Difficulty::new(&self.tuning);
        self.spawner = Spawner::new(&self.tuning, &mut self.rng);
        self.actor = Actor::new(&self.tuning);
        self.obstacles.clear();
        self.particles.clear();
        self.show_restart = false;
        self.time_ticks = 0;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset (best {})", self.best);
    }

    /// Enter the terminal phase and fold the score into the best
    pub(crate) fn game_over(&mut self) {
        let score = self.difficulty.score.max(0.0).floor() as u64;
        let new_high = score > self.best;
        self.best = self.best.max(score);
        self.phase = GamePhase::Over;
        self.show_restart = true;
        self.actor.clear_jump();
        self.events.push(GameEvent::GameOver {
            score,
            best: self.best,
            new_high,
        });
        if new_high {
            log::info!("Game over: score {score}, new high score!");
        } else {
            log::info!("Game over: score {score}, best {}", self.best);
        }
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
