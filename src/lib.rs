//! snake-gym - A deterministic grid-based snake environment
//!
//! This library provides:
//! - Core simulation logic: tick stepping, growth bookkeeping, dual-strategy
//!   food placement, collision rules and the grid observation encoding
//!   (game module)
//! - A gym-style reset/step wrapper with index-based actions (env module)
//! - In-memory episode recording and playback (replay module)
//! - Cross-episode statistics for rollout drivers (metrics module)

pub mod env;
pub mod game;
pub mod metrics;
pub mod replay;
