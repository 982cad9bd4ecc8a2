//! Fixed-step accumulator
//!
//! Turns a variable-rate host clock into a whole number of fixed steps.
//! Leftover time carries to the next frame.

use serde::{Deserialize, Serialize};

/// Fixed-timestep accumulator driven by host timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedClock {
    /// Fixed step (seconds)
    pub step: f64,
    /// Largest frame delta accepted (seconds)
    pub max_frame_delta: f64,
    /// Unconsumed time
    accumulator: f64,
    /// Previous host timestamp, `None` before the first tick
    last_timestamp: Option<f64>,
}

impl FixedClock {
    pub fn new(step: f64, max_frame_delta: f64) -> Self {
        Self {
            step,
            max_frame_delta,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Elapsed time since the previous timestamp. The first call yields 0.
    pub fn elapsed_since(&mut self, timestamp: f64) -> f64 {
        let elapsed = match self.last_timestamp {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp);
        elapsed
    }

    /// Feed a host timestamp; returns how many fixed steps to run
    pub fn tick(&mut self, timestamp: f64) -> u32 {
        let elapsed = self.elapsed_since(timestamp);
        self.accumulate(elapsed)
    }

    /// Feed an elapsed duration directly; returns how many fixed steps to run.
    /// Negative and non-finite input counts as zero; large input is clamped.
    pub fn accumulate(&mut self, elapsed: f64) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, self.max_frame_delta)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Time waiting for the next step
    pub fn leftover(&self) -> f64 {
        self.accumulator
    }

    /// Render interpolation factor between the last and next step, in [0, 1)
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }
}
