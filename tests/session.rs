//! End-to-end play through the host driver

use minimal_runner::persistence::{JsonFileStore, MemoryStore, ScoreStore};
use minimal_runner::sim::{Autopilot, GameEvent, GamePhase};
use minimal_runner::{Runner, TickInput, Tuning};

const FRAME: f64 = 1.0 / 60.0;

/// Play until the first game over (or the frame budget runs out)
fn play_one_run<S: ScoreStore>(runner: &mut Runner<S>, start: f64, frames: u64) -> f64 {
    let mut now = start;
    for _ in 0..frames {
        let input = TickInput {
            jump: runner.session().phase == GamePhase::NotStarted,
            restart: false,
        };
        runner.tick(now, &input);
        now += FRAME;
        if runner.session().phase == GamePhase::Over {
            break;
        }
    }
    now
}

#[test]
fn test_passive_run_ends_and_persists_best() {
    let mut runner = Runner::new(Tuning::default(), MemoryStore::new(), 2024);
    play_one_run(&mut runner, 0.0, 60 * 60);

    let session = runner.session();
    assert_eq!(session.phase, GamePhase::Over);
    assert!(session.show_restart);
    assert_eq!(session.best, session.score().floor() as u64);
    assert_eq!(runner.store().load_best(), session.best);
}

#[test]
fn test_best_is_monotonic_across_restarts() {
    let mut runner = Runner::new(Tuning::default(), MemoryStore::new(), 7);
    let mut now = 0.0;
    let mut best_seen = 0;
    for _ in 0..4 {
        now = play_one_run(&mut runner, now, 60 * 60);
        let floored = runner.session().score().floor() as u64;
        best_seen = best_seen.max(floored);
        assert_eq!(runner.session().best, best_seen);

        let snap = runner.tick(
            now,
            &TickInput {
                jump: false,
                restart: true,
            },
        );
        now += FRAME;
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.best, best_seen);
        assert_eq!(snap.score, 0.0);
    }
    assert_eq!(runner.store().load_best(), best_seen);
}

#[test]
fn test_best_score_survives_process_restart() {
    let dir = std::env::temp_dir().join(format!("minimal-runner-it-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("best.json");

    let first_best = {
        let mut runner = Runner::new(Tuning::default(), JsonFileStore::new(&path), 11);
        play_one_run(&mut runner, 0.0, 60 * 60);
        runner.session().best
    };
    assert!(first_best > 0);

    let runner = Runner::new(Tuning::default(), JsonFileStore::new(&path), 12);
    assert_eq!(runner.session().best, first_best);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_autopilot_soak_keeps_invariants() {
    let tuning = Tuning::default();
    let floor_y = tuning.floor_y();
    let mut runner = Runner::new(tuning.clone(), MemoryStore::new(), 31337);
    let pilot = Autopilot::default();

    let mut last_score = 0.0f64;
    let mut last_speed = tuning.initial_speed;
    // Two simulated minutes at a jittery frame rate
    let mut now = 0.0;
    for i in 0..(120 * 60) {
        let session = runner.session();
        let input = TickInput {
            jump: pilot.decide(session),
            restart: session.phase == GamePhase::Over,
        };
        now += if i % 3 == 0 { 1.0 / 30.0 } else { 1.0 / 144.0 };
        let snap = runner.tick(now, &input);

        assert!(snap.steps <= 6);
        assert!(snap.actor.y <= floor_y);
        assert!(snap.obstacles.windows(2).all(|w| w[0].x < w[1].x));
        assert!(snap.particles.iter().all(|p| (0.0..=1.0).contains(&p.alpha)));

        let session = runner.session();
        if session.phase == GamePhase::Running {
            if runner.events().iter().any(|e| matches!(e, GameEvent::Started)) {
                last_score = 0.0;
                last_speed = tuning.initial_speed;
            }
            assert!(session.score() >= last_score);
            assert!(session.speed() >= last_speed);
            assert!(session.speed() <= tuning.max_speed);
            last_score = session.score();
            last_speed = session.speed();
        }
    }
}
