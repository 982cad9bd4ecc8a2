//! Minimal Runner - a side-scrolling jump-over-obstacles runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor, obstacles, particles, collision, clock)
//! - `runner`: Host-facing driver turning timestamps into fixed steps
//! - `snapshot`: Read-only view of the session for presentation
//! - `persistence`: Best-score slot storage
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod persistence;
pub mod runner;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::{StoreError, TuningError};
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};
pub use runner::{Runner, TickInput};
pub use snapshot::Snapshot;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Largest host frame delta fed into the accumulator (stall guard)
    pub const MAX_FRAME_DELTA: f64 = 0.05;

    /// Visible area (virtual units)
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 360.0;
    pub const GROUND_Y: f32 = 290.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 120.0;
    pub const ACTOR_SIZE: f32 = 30.0;
    pub const JUMP_VELOCITY: f32 = -620.0;
    pub const GRAVITY: f32 = 2100.0;
    pub const ALLOW_DOUBLE_JUMP: bool = true;
    /// Jumps allowed between ground contacts when airborne jumping is on
    pub const MAX_JUMPS: u32 = 2;

    /// World speed ramp (units/s)
    pub const INITIAL_WORLD_SPEED: f32 = 320.0;
    pub const MAX_WORLD_SPEED: f32 = 650.0;
    pub const SPEED_INCREASE_PER_SEC: f32 = 9.0;
    /// Points per second while running
    pub const SCORE_RATE: f32 = 10.0;

    /// Obstacle spawning
    pub const SPAWN_INTERVAL_MIN: f32 = 0.8;
    pub const SPAWN_INTERVAL_MAX: f32 = 1.8;
    pub const MIN_SPAWN_DISTANCE: f32 = 200.0;
    pub const SPAWN_OFFSET_MIN: u32 = 20;
    pub const SPAWN_OFFSET_MAX: u32 = 70;
    /// Spawn delay multiplier reduction at max speed (1.0 - 0.32 = 0.68)
    pub const SPAWN_DELAY_SHRINK: f32 = 0.32;
    pub const OBSTACLE_MIN_WIDTH: u32 = 22;
    pub const OBSTACLE_MAX_WIDTH: u32 = 42;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 26;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 58;
    /// Obstacles are culled once their right edge is left of -CULL_MARGIN
    pub const CULL_MARGIN: f32 = 10.0;

    /// Landing dust
    pub const DUST_COUNT: usize = 5;
    pub const DUST_DRAG: f32 = 0.96;
    pub const DUST_GRAVITY: f32 = 1250.0;
    pub const DUST_LIFE_MIN: f32 = 0.16;
    pub const DUST_LIFE_MAX: f32 = 0.34;
    pub const MAX_PARTICLES: usize = 256;
}

/// Clamp that never panics on an inverted range (min wins)
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        // Inverted range resolves to min instead of panicking
        assert_eq!(clamp(0.5, 2.0, 1.0), 2.0);
    }
}
