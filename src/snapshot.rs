//! Read-only view of a session for presentation

use serde::{Deserialize, Serialize};

use crate::sim::collision::Rect;
use crate::sim::rng::RandomSource;
use crate::sim::state::{GamePhase, Session};

/// A particle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Fade factor in [0, 1]
    pub alpha: f32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: f64,
    pub best: u64,
    pub actor: Rect,
    pub obstacles: Vec<Rect>,
    pub particles: Vec<ParticleView>,
    pub show_restart: bool,
    /// Fixed steps simulated during the host tick that produced this
    pub steps: u32,
    /// Fraction of a step carried in the clock
    pub alpha: f64,
}

impl Snapshot {
    pub fn capture<R: RandomSource>(session: &Session<R>, steps: u32, alpha: f64) -> Self {
        Self {
            phase: session.phase,
            score: session.score(),
            best: session.best,
            actor: session.actor.rect(),
            obstacles: session.obstacles.iter().map(|o| o.rect()).collect(),
            particles: session
                .particles
                .iter()
                .map(|p| ParticleView {
                    x: p.pos.x,
                    y: p.pos.y,
                    size: p.size,
                    alpha: p.alpha(),
                })
                .collect(),
            show_restart: session.show_restart,
            steps,
            alpha,
        }
    }

    /// Score as shown on the HUD
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}
