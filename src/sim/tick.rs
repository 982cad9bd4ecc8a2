//! Fixed timestep simulation tick
//!
//! Advances a running session by exactly one fixed step, in a fixed order:
//! actor, world speed and score, spawning, obstacle scroll and cull,
//! particles, then the collision check.

use super::collision::first_hit;
use super::obstacle;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, Session};

/// Advance the session by one fixed step. No-op unless running.
pub fn tick<R: RandomSource>(state: &mut Session<R>, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.time_ticks += 1;

    if let Some(landing) = state.actor.step(&state.tuning, dt) {
        log::debug!("Landed at x={:.1}", landing.x);
        state.events.push(GameEvent::Landed {
            x: landing.x,
            y: landing.y,
        });
        if state.tuning.particles {
            state.particles.spawn_landing(landing, &mut state.rng);
        }
    }

    state.difficulty.step(&state.tuning, dt);

    state.spawner.step(
        &state.tuning,
        state.difficulty.speed,
        &mut state.obstacles,
        &mut state.rng,
        dt,
    );

    obstacle::advance(&mut state.obstacles, &state.tuning, state.difficulty.speed, dt);

    state.particles.step(dt);

    check_collision(state);
}

/// End the run on the first obstacle overlapping the actor
fn check_collision<R: RandomSource>(state: &mut Session<R>) {
    let actor = state.actor.rect();
    let rects: Vec<_> = state.obstacles.iter().map(|o| o.rect()).collect();
    if let Some(index) = first_hit(&actor, &rects) {
        log::debug!("Hit obstacle {index} at x={:.1}", rects[index].x);
        state.game_over();
    }
}
