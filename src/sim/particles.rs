//! Landing dust
//!
//! Purely cosmetic: particles never feed back into collision or score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Landing;
use super::rng::RandomSource;
use crate::clamp;
use crate::consts::{DUST_COUNT, DUST_DRAG, DUST_GRAVITY, DUST_LIFE_MAX, DUST_LIFE_MIN};

/// A short-lived dust mote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Seconds left to live
    pub life: f32,
}

impl Particle {
    /// Fade factor in [0, 1] relative to the longest possible lifetime
    pub fn alpha(&self) -> f32 {
        clamp(self.life / DUST_LIFE_MAX, 0.0, 1.0)
    }
}

/// Capped particle pool
#[derive(Debug, Clone)]
pub struct Particles {
    items: Vec<Particle>,
    cap: usize,
}

impl Particles {
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap.min(64)),
            cap,
        }
    }

    /// Emit a puff of dust at a landing point. Drops emissions past the cap.
    pub fn spawn_landing(&mut self, landing: Landing, rng: &mut impl RandomSource) {
        for _ in 0..DUST_COUNT {
            let pos = Vec2::new(landing.x + rng.range(-8.0, 8.0), landing.y - 2.0);
            let vel = Vec2::new(rng.range(-60.0, 95.0), rng.range(-180.0, -60.0));
            let size = rng.range(2.0, 4.0);
            let life = rng.range(DUST_LIFE_MIN, DUST_LIFE_MAX);
            if self.items.len() < self.cap {
                self.items.push(Particle {
                    pos,
                    vel,
                    size,
                    life,
                });
            }
        }
    }

    /// Integrate and expire. Drag is a fixed per-step multiplier.
    pub fn step(&mut self, dt: f32) {
        for p in self.items.iter_mut() {
            p.vel.x *= DUST_DRAG;
            p.vel.y += DUST_GRAVITY * dt;
            p.pos += p.vel * dt;
            p.life -= dt;
        }
        self.items.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }
}
