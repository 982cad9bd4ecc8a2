//! Host-facing game driver
//!
//! Owns the session, the fixed-step clock and the best-score store. The
//! host calls [`Runner::tick`] once per frame with its timestamp and the
//! frame's input, and draws the returned snapshot.

use rand_pcg::Pcg32;

use crate::persistence::ScoreStore;
use crate::sim::clock::FixedClock;
use crate::sim::rng::{RandomSource, seeded};
use crate::sim::state::{GameEvent, Session};
use crate::sim::tick::tick;
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Input for one host frame. Repeated presses within a frame are one press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (also starts an idle run)
    pub jump: bool,
    /// Restart after a game over
    pub restart: bool,
}

/// Game instance holding all state
pub struct Runner<S: ScoreStore, R: RandomSource = Pcg32> {
    session: Session<R>,
    clock: FixedClock,
    store: S,
    /// Events from the most recent tick
    events: Vec<GameEvent>,
}

impl<S: ScoreStore> Runner<S, Pcg32> {
    /// Build a runner with the best score read from `store`
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Self {
        Self::with_rng(tuning, store, seeded(seed))
    }
}

impl<S: ScoreStore, R: RandomSource> Runner<S, R> {
    /// Build a runner around a caller-supplied RNG. Tuning that fails
    /// validation is replaced by the defaults.
    pub fn with_rng(tuning: Tuning, store: S, rng: R) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({e}), using defaults");
                Tuning::default()
            }
        };
        let best = store.load_best();
        let clock = FixedClock::new(tuning.fixed_timestep, tuning.max_frame_delta);
        log::info!(
            "Runner ready: step {:.4}s, best {best}",
            tuning.fixed_timestep
        );
        Self {
            session: Session::with_rng(tuning, best, rng),
            clock,
            store,
            events: Vec::new(),
        }
    }

    /// Advance to host timestamp `now` (seconds) and snapshot the result
    pub fn tick(&mut self, now: f64, input: &TickInput) -> Snapshot {
        self.apply_input(input);
        let steps = self.clock.tick(now);
        self.run_steps(steps)
    }

    /// Advance by an elapsed duration instead of a timestamp
    pub fn advance(&mut self, elapsed: f64, input: &TickInput) -> Snapshot {
        self.apply_input(input);
        let steps = self.clock.accumulate(elapsed);
        self.run_steps(steps)
    }

    fn apply_input(&mut self, input: &TickInput) {
        if input.restart {
            self.session.request_restart();
        }
        if input.jump {
            self.session.request_jump();
        }
    }

    fn run_steps(&mut self, steps: u32) -> Snapshot {
        let dt = self.clock.step as f32;
        for _ in 0..steps {
            tick(&mut self.session, dt);
        }
        log::trace!("Host tick ran {steps} steps");

        self.events = self.session.drain_events();
        for event in &self.events {
            if let GameEvent::GameOver { best, .. } = *event {
                if let Err(e) = self.store.save_best(best) {
                    log::warn!("Failed to save best score: {e}");
                }
            }
        }

        Snapshot::capture(&self.session, steps, self.clock.alpha())
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Events raised during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::state::GamePhase;

    const FRAME: f64 = 1.0 / 60.0;
    const JUMP: TickInput = TickInput {
        jump: true,
        restart: false,
    };
    const RESTART: TickInput = TickInput {
        jump: false,
        restart: true,
    };

    #[test]
    fn test_seeds_best_from_store() {
        let runner = Runner::new(Tuning::default(), MemoryStore::with_best(55), 1);
        assert_eq!(runner.session().best, 55);
    }

    #[test]
    fn test_invalid_tuning_falls_back_to_defaults() {
        let tuning = Tuning {
            fixed_timestep: 0.0,
            ..Tuning::default()
        };
        let mut runner = Runner::new(tuning, MemoryStore::new(), 1);
        assert_eq!(runner.session().tuning, Tuning::default());

        runner.advance(0.0, &JUMP);
        let snap = runner.advance(FRAME, &TickInput::default());
        assert_eq!(snap.steps, 2);
    }

    #[test]
    fn test_first_tick_runs_no_steps() {
        let mut runner = Runner::new(Tuning::default(), MemoryStore::new(), 1);
        let snap = runner.tick(1000.0, &JUMP);
        assert_eq!(snap.steps, 0);
        assert_eq!(snap.phase, GamePhase::Running);
        // The jump stays latched until a step consumes it
        assert!(runner.session().actor.jump_pending());

        let snap = runner.tick(1000.0 + FRAME, &TickInput::default());
        assert!(snap.steps >= 1);
        assert!(!runner.session().actor.jump_pending());
        assert!(snap.actor.y < 260.0);
    }

    #[test]
    fn test_jump_while_over_is_ignored_and_restart_resets() {
        let mut runner = Runner::new(Tuning::default(), MemoryStore::new(), 3);
        runner.advance(0.0, &JUMP);
        runner.session.difficulty.score = 64.2;
        runner.session.obstacles.push(Obstacle {
            x: 125.0,
            y: 250.0,
            width: 30.0,
            height: 40.0,
        });
        // Let the jump resolve, then drop the actor back onto the obstacle
        runner.session.actor.y = 255.0;
        runner.session.actor.vel_y = 0.0;
        runner.session.actor.clear_jump();
        let snap = runner.advance(FRAME, &TickInput::default());
        assert_eq!(snap.phase, GamePhase::Over);
        assert!(snap.show_restart);
        assert_eq!(snap.best, 64);
        assert_eq!(runner.store().load_best(), 64);
        assert_eq!(runner.store().writes, 1);

        let snap = runner.advance(FRAME, &JUMP);
        assert_eq!(snap.phase, GamePhase::Over);

        let snap = runner.advance(FRAME, &RESTART);
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert!(!snap.show_restart);
        assert_eq!(snap.best, 64);
        assert_eq!(snap.score, 0.0);
        assert!(snap.obstacles.is_empty());
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut runner = Runner::new(Tuning::default(), MemoryStore::new(), 3);
        runner.advance(FRAME, &JUMP);
        let snap = runner.advance(FRAME, &RESTART);
        assert_eq!(snap.phase, GamePhase::Running);
        assert!(snap.score > 0.0);
    }

    #[test]
    fn test_frame_rate_independent() {
        // Same simulated time at 30 and 240 Hz lands on the same state
        let mut slow = Runner::new(Tuning::default(), MemoryStore::new(), 77);
        let mut fast = Runner::new(Tuning::default(), MemoryStore::new(), 77);
        slow.advance(0.0, &JUMP);
        fast.advance(0.0, &JUMP);

        // One second of host time either way; float drift may shift one step
        for _ in 0..30 {
            slow.advance(1.0 / 30.0, &TickInput::default());
        }
        for _ in 0..240 {
            fast.advance(1.0 / 240.0, &TickInput::default());
        }

        let (a, b) = (slow.session(), fast.session());
        assert!((a.time_ticks as i64 - b.time_ticks as i64).abs() <= 1);
        if a.time_ticks == b.time_ticks {
            assert_eq!(a.obstacles, b.obstacles);
            assert_eq!(a.score(), b.score());
            assert_eq!(a.actor, b.actor);
        }
    }
}
