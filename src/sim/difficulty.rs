//! World speed ramp and score accrual

use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::tuning::Tuning;

/// Scroll speed and distance-based score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Scroll speed (units/s), always within [initial, max]
    pub speed: f32,
    /// Fractional score; floor it for display. Kept in f64 so small steps
    /// still register on long runs.
    pub score: f64,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.initial_speed,
            score: 0.0,
        }
    }

    pub fn step(&mut self, tuning: &Tuning, dt: f32) {
        self.speed = clamp(
            self.speed + tuning.speed_increase_per_sec * dt,
            tuning.initial_speed,
            tuning.max_speed,
        );
        self.score += f64::from(tuning.score_rate) * f64::from(dt);
    }
}
