//! Core game logic module for Snake
//!
//! Everything here is pure simulation with no I/O or rendering
//! dependencies: one discrete tick per action, applied to a single owned
//! world state. The gym-style wrapper in [`crate::env`] is the intended
//! entry point for most callers.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod observation;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, DEATH_PENALTY, FOOD_REWARD, GROWTH_PER_FOOD};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use observation::{Observation, BODY_CELL, EMPTY_CELL, FOOD_CELL, HEAD_CELL};
pub use state::{CollisionType, GameState, Position, Snake};
