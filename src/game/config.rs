use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Reward for eating a piece of food
pub const FOOD_REWARD: f32 = 1.0;
/// Reward when the episode terminates by collision or a full board
pub const DEATH_PENALTY: f32 = -1.0;
/// Number of ticks the tail pop is suppressed after eating
pub const GROWTH_PER_FOOD: u32 = 2;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Seed for the engine RNG; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 40,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a configuration with a fixed seed for reproducible episodes
    pub fn seeded(grid_size: usize, seed: u64) -> Self {
        Self {
            grid_size,
            seed: Some(seed),
        }
    }

    /// Initial snake length for this grid size
    pub fn initial_snake_length(&self) -> usize {
        (self.grid_size / 6).max(2)
    }

    /// Total number of cells on the board
    pub fn arena_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Reject configurations the engine cannot run with
    ///
    /// The initial segment starts at the center cell and trails toward
    /// increasing columns, so the board needs room for
    /// `grid_size / 2 + initial_snake_length()` columns. Below that the
    /// snake cannot be placed in bounds, and on a one-cell board the
    /// rejection-sampling food spawner would never terminate. Fatal at
    /// construction rather than an in-band game condition.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size > 0,
            "grid_size must be positive, got {}",
            self.grid_size
        );
        ensure!(
            self.grid_size / 2 + self.initial_snake_length() <= self.grid_size,
            "grid_size {} cannot fit the initial snake segment",
            self.grid_size
        );
        Ok(())
    }
}
