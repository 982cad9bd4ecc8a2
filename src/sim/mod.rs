//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order for obstacles)
//! - No rendering, input or storage dependencies

pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod particles;
pub mod rng;
pub mod state;
pub mod tick;

pub use actor::{Actor, Landing};
pub use autopilot::Autopilot;
pub use clock::FixedClock;
pub use collision::{Rect, first_hit, intervals_overlap};
pub use difficulty::Difficulty;
pub use obstacle::{Obstacle, SpawnOutcome, Spawner};
pub use particles::{Particle, Particles};
pub use rng::{RandomSource, seeded};
pub use state::{GameEvent, GamePhase, Session};
pub use tick::tick;
