//! Episode recording and playback
//!
//! A recorder collaborator captures one `(observation, reward, done,
//! direction, action)` tuple per tick, in the order generated; a playback
//! collaborator later reconstructs the observation stream and heading
//! bit-for-bit from the record without re-running the simulation. The
//! record types are serde-serializable so callers can persist them in
//! whatever format they choose; this module itself does no disk I/O.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::game::{Direction, Observation};

/// One tick of a recorded episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Post-move observation returned by the environment this tick
    pub observation: Observation,
    /// Reward returned this tick
    pub reward: f32,
    /// Whether the episode terminated this tick
    pub done: bool,
    /// Heading after the tick's turn was applied
    pub direction: Direction,
    /// Action index the caller supplied
    pub action: usize,
}

/// Accumulates replay steps in generation order
#[derive(Debug, Default)]
pub struct EpisodeRecorder {
    steps: Vec<ReplayStep>,
}

impl EpisodeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tick to the record
    pub fn record(
        &mut self,
        observation: Observation,
        reward: f32,
        done: bool,
        direction: Direction,
        action: usize,
    ) {
        self.steps.push(ReplayStep {
            observation,
            reward,
            done,
            direction,
            action,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    /// Consume the recorder, yielding the ordered record
    pub fn into_steps(self) -> Vec<ReplayStep> {
        self.steps
    }
}

/// Steps through a recorded episode with the environment's own surface
///
/// `reset` returns the first recorded observation; `step` advances the
/// cursor, ignoring the supplied action and restoring the recorded
/// direction and observation instead. Once the record is exhausted the
/// final observation repeats with `done = true`.
#[derive(Debug)]
pub struct ReplayPlayback {
    steps: Vec<ReplayStep>,
    offset: usize,
    curr_dir: Direction,
}

impl ReplayPlayback {
    /// Build a playback over a non-empty record
    pub fn new(steps: Vec<ReplayStep>) -> Result<Self> {
        ensure!(!steps.is_empty(), "replay record holds no steps");
        let curr_dir = steps[0].direction;
        Ok(Self {
            steps,
            offset: 0,
            curr_dir,
        })
    }

    /// Rewind to the start and return the first recorded observation
    pub fn reset(&mut self) -> Observation {
        self.offset = 0;
        self.curr_dir = self.steps[0].direction;
        self.steps[0].observation.clone()
    }

    /// Advance to the next recorded tick
    ///
    /// The action argument is accepted for interface parity and ignored.
    pub fn step(&mut self, _action_idx: usize) -> (Observation, f32, bool) {
        if self.offset >= self.steps.len() - 1 {
            let last = &self.steps[self.offset];
            return (last.observation.clone(), 0.0, true);
        }
        self.offset += 1;
        let step = &self.steps[self.offset];
        self.curr_dir = step.direction;
        (step.observation.clone(), step.reward, step.done)
    }

    /// Heading recorded at the current cursor position
    pub fn curr_dir(&self) -> Direction {
        self.curr_dir
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
