//! Demo mode - a simple controller that plays the game
//!
//! Looks at the nearest obstacle ahead and jumps when it is about to pass
//! under the actor. Used by the headless driver and soak tests.

use super::rng::RandomSource;
use super::state::{GamePhase, Session};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Seconds of travel at current speed to look ahead before jumping
    pub lead_time: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { lead_time: 0.14 }
    }
}

impl Autopilot {
    /// Whether to press jump this frame
    pub fn decide<R: RandomSource>(&self, session: &Session<R>) -> bool {
        match session.phase {
            GamePhase::NotStarted => return true,
            GamePhase::Over => return false,
            GamePhase::Running => {}
        }

        let actor = session.actor.rect();
        if !session.actor.can_jump(&session.tuning) {
            return false;
        }

        // Obstacles are sorted left to right; first one not yet passed
        let Some(next) = session.obstacles.iter().find(|o| o.right() > actor.x) else {
            return false;
        };

        let distance = next.x - actor.right();
        let window = session.speed() * self.lead_time;
        // Already clear of its top: no need to spend a jump
        let clear = actor.bottom() <= next.y;
        (0.0..=window).contains(&distance) && !clear
    }
}
