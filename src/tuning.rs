//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON file can override any of
//! them. Missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Clock ===
    /// Fixed simulation step (seconds)
    pub fixed_timestep: f64,
    /// Upper bound on a single host frame delta (seconds)
    pub max_frame_delta: f64,

    // === Playfield ===
    pub view_width: f32,
    pub view_height: f32,
    pub ground_y: f32,

    // === Actor ===
    pub actor_x: f32,
    pub actor_size: f32,
    /// Launch velocity (negative is up)
    pub jump_velocity: f32,
    pub gravity: f32,
    pub allow_double_jump: bool,
    pub max_jumps: u32,

    // === Difficulty ===
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increase_per_sec: f32,
    pub score_rate: f32,

    // === Spawning ===
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    pub min_spawn_distance: f32,
    pub spawn_offset_min: u32,
    pub spawn_offset_max: u32,
    pub spawn_delay_shrink: f32,
    pub obstacle_min_width: u32,
    pub obstacle_max_width: u32,
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,
    pub cull_margin: f32,

    // === Effects ===
    /// Landing dust on/off (cosmetic only)
    pub particles: bool,
    pub max_particles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fixed_timestep: SIM_DT,
            max_frame_delta: MAX_FRAME_DELTA,

            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            ground_y: GROUND_Y,

            actor_x: ACTOR_X,
            actor_size: ACTOR_SIZE,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            allow_double_jump: ALLOW_DOUBLE_JUMP,
            max_jumps: MAX_JUMPS,

            initial_speed: INITIAL_WORLD_SPEED,
            max_speed: MAX_WORLD_SPEED,
            speed_increase_per_sec: SPEED_INCREASE_PER_SEC,
            score_rate: SCORE_RATE,

            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            spawn_offset_min: SPAWN_OFFSET_MIN,
            spawn_offset_max: SPAWN_OFFSET_MAX,
            spawn_delay_shrink: SPAWN_DELAY_SHRINK,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            cull_margin: CULL_MARGIN,

            particles: true,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot honour
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("fixed_timestep", self.fixed_timestep)?;
        positive("max_frame_delta", self.max_frame_delta)?;
        positive("view_width", self.view_width as f64)?;
        positive("ground_y", self.ground_y as f64)?;
        positive("actor_size", self.actor_size as f64)?;
        positive("gravity", self.gravity as f64)?;
        positive("initial_speed", self.initial_speed as f64)?;
        positive("spawn_interval_min", self.spawn_interval_min as f64)?;
        non_negative("speed_increase_per_sec", self.speed_increase_per_sec as f64)?;
        non_negative("score_rate", self.score_rate as f64)?;

        ordered("world_speed", self.initial_speed as f64, self.max_speed as f64)?;
        ordered(
            "spawn_interval",
            self.spawn_interval_min as f64,
            self.spawn_interval_max as f64,
        )?;
        ordered(
            "spawn_offset",
            self.spawn_offset_min as f64,
            self.spawn_offset_max as f64,
        )?;
        ordered(
            "obstacle_width",
            self.obstacle_min_width as f64,
            self.obstacle_max_width as f64,
        )?;
        ordered(
            "obstacle_height",
            self.obstacle_min_height as f64,
            self.obstacle_max_height as f64,
        )?;
        ordered("actor_height", self.actor_size as f64, self.ground_y as f64)?;
        ordered("ground_y", self.ground_y as f64, self.view_height as f64)?;

        if !(0.0..1.0).contains(&self.spawn_delay_shrink) {
            return Err(TuningError::NotUnitFraction {
                field: "spawn_delay_shrink",
                value: self.spawn_delay_shrink as f64,
            });
        }
        Ok(())
    }

    /// Resting y of the actor's top edge
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.ground_y - self.actor_size
    }

    /// How far world speed has progressed toward max, in [0, 1]
    pub fn speed_ratio(&self, speed: f32) -> f32 {
        let span = self.max_speed - self.initial_speed;
        if span <= 0.0 {
            return 0.0;
        }
        crate::clamp((speed - self.initial_speed) / span, 0.0, 1.0)
    }

    /// Multiplier applied to a freshly drawn spawn delay
    pub fn spawn_scale(&self, speed: f32) -> f32 {
        1.0 - self.spawn_delay_shrink * self.speed_ratio(speed)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Negative { field, value })
    }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), TuningError> {
    if min <= max {
        Ok(())
    } else {
        Err(TuningError::InvalidRange { field, min, max })
    }
}
