//! Obstacle spawning, scrolling and culling
//!
//! Obstacles are kept in spawn order, which is also left-to-right order,
//! so the last element is always the most recently spawned one.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::RandomSource;
use crate::tuning::Tuning;

/// A ground-standing block the actor must clear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What the spawner did this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOutcome {
    /// Timer has not reached the delay yet
    Waiting,
    /// Timer is due but the previous obstacle is still too close to the edge
    Deferred { gap: f32 },
    /// A new obstacle was appended
    Spawned(Obstacle),
}

/// Timed obstacle generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds since the last successful spawn
    pub timer: f32,
    /// Seconds to wait before the next spawn attempt
    pub delay: f32,
}

impl Spawner {
    pub fn new(tuning: &Tuning, rng: &mut impl RandomSource) -> Self {
        Self {
            timer: 0.0,
            delay: rng.range(tuning.spawn_interval_min, tuning.spawn_interval_max),
        }
    }

    /// Accumulate time and spawn when due and fair.
    ///
    /// `speed` is the world speed at the moment the spawn succeeds; it only
    /// shapes the delay before the next spawn.
    pub fn step(
        &mut self,
        tuning: &Tuning,
        speed: f32,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut impl RandomSource,
        dt: f32,
    ) -> SpawnOutcome {
        self.timer += dt;
        if self.timer < self.delay {
            return SpawnOutcome::Waiting;
        }

        if let Some(last) = obstacles.last() {
            let gap = tuning.view_width - last.right();
            if gap < tuning.min_spawn_distance {
                log::trace!("Spawn deferred, gap {gap:.1}");
                return SpawnOutcome::Deferred { gap };
            }
        }

        let width = rng.range_int(tuning.obstacle_min_width, tuning.obstacle_max_width) as f32;
        let height = rng.range_int(tuning.obstacle_min_height, tuning.obstacle_max_height) as f32;
        let offset = rng.range_int(tuning.spawn_offset_min, tuning.spawn_offset_max) as f32;
        let obstacle = Obstacle {
            x: tuning.view_width + offset,
            y: tuning.ground_y - height,
            width,
            height,
        };
        obstacles.push(obstacle);

        self.timer = 0.0;
        self.delay = rng.range(tuning.spawn_interval_min, tuning.spawn_interval_max)
            * tuning.spawn_scale(speed);
        log::debug!(
            "Spawned {width}x{height} obstacle at x={:.0}, next in {:.2}s",
            obstacle.x,
            self.delay
        );
        SpawnOutcome::Spawned(obstacle)
    }
}

/// Scroll every obstacle left and drop the ones that left the screen.
/// Survivors keep their relative order. Returns how many were culled.
pub fn advance(obstacles: &mut Vec<Obstacle>, tuning: &Tuning, speed: f32, dt: f32) -> usize {
    let shift = speed * dt;
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= shift;
    }
    let before = obstacles.len();
    obstacles.retain(|o| o.right() > -tuning.cull_margin);
    before - obstacles.len()
}
