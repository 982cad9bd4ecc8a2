//! The runner: vertical-only kinematics with jump and double jump
//!
//! Horizontal position never changes; the world scrolls instead.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Where the actor touched down this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Point on the ground line under the actor's leading foot
    pub x: f32,
    pub y: f32,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vel_y: f32,
    pub grounded: bool,
    /// Jumps taken since the last ground contact
    pub jumps_used: u32,
    /// Latched jump request, consumed by the next step
    #[serde(skip)]
    jump_pending: bool,
}

impl Actor {
    /// A grounded actor at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.actor_x,
            y: tuning.floor_y(),
            width: tuning.actor_size,
            height: tuning.actor_size,
            vel_y: 0.0,
            grounded: true,
            jumps_used: 0,
            jump_pending: false,
        }
    }

    /// Latch a jump; several requests before the next step count as one
    pub fn request_jump(&mut self) {
        self.jump_pending = true;
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_pending
    }

    pub fn clear_jump(&mut self) {
        self.jump_pending = false;
    }

    /// Whether a jump would be honoured right now
    pub fn can_jump(&self, tuning: &Tuning) -> bool {
        self.grounded || (tuning.allow_double_jump && self.jumps_used < tuning.max_jumps)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one fixed step. Returns the landing point on the step the
    /// actor goes from airborne to grounded.
    pub fn step(&mut self, tuning: &Tuning, dt: f32) -> Option<Landing> {
        self.resolve_jump(tuning);

        let was_grounded = self.grounded;
        self.vel_y += tuning.gravity * dt;
        self.y += self.vel_y * dt;

        // Ceiling keeps the actor inside the playfield
        if self.y < 0.0 {
            self.y = 0.0;
            self.vel_y = self.vel_y.max(0.0);
        }

        let floor_y = tuning.ground_y - self.height;
        if self.y >= floor_y {
            self.y = floor_y;
            self.vel_y = 0.0;
            self.grounded = true;
            self.jumps_used = 0;
            if !was_grounded {
                return Some(Landing {
                    x: self.x + self.width * 0.35,
                    y: tuning.ground_y,
                });
            }
        } else {
            self.grounded = false;
        }
        None
    }

    fn resolve_jump(&mut self, tuning: &Tuning) {
        if self.jump_pending && self.can_jump(tuning) {
            self.vel_y = tuning.jump_velocity;
            self.grounded = false;
            self.jumps_used += 1;
        }
        self.jump_pending = false;
    }
}
