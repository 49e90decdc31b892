//! Gym-style environment wrapper around the core game
//!
//! Provides index-based discrete actions, the `reset`/`step` contract and
//! an ASCII debug render on top of [`crate::game`].

pub mod environment;

pub use environment::SnakeEnv;
