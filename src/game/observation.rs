use serde::{Deserialize, Serialize};

use super::state::{GameState, Position};

/// Cell code for an empty cell
pub const EMPTY_CELL: u8 = 0;
/// Cell code for a non-head body segment
pub const BODY_CELL: u8 = 1;
/// Cell code for the snake head
pub const HEAD_CELL: u8 = 2;
/// Cell code for the food cell
pub const FOOD_CELL: u8 = 3;

/// Fixed-shape grid encoding of the world
///
/// A `grid_size × grid_size × 1` array of cell codes, stored row-major.
/// The code set `{0 empty, 1 body, 2 head, 3 food}` and the shape are a
/// compatibility contract shared by every consumer (renderer, recorder,
/// trainer), so they must stay stable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    grid_size: usize,
    cells: Vec<u8>,
}

impl Observation {
    /// Encode a game state into a fresh observation
    ///
    /// Food is written first, then every non-head body segment, then the
    /// head, so the head code wins the transient overlaps that occur the
    /// tick food is eaten or the tail cell is re-entered while growing.
    /// Out-of-bounds cells (a just-collided head, trailing segments of a
    /// snake that left the board) are silently skipped.
    pub fn encode(state: &GameState) -> Self {
        let grid_size = state.grid_size;
        let mut obs = Self {
            grid_size,
            cells: vec![EMPTY_CELL; grid_size * grid_size],
        };

        if let Some(food) = state.food {
            obs.write(food, FOOD_CELL);
        }
        for &segment in &state.snake.body[1..] {
            obs.write(segment, BODY_CELL);
        }
        obs.write(state.snake.head(), HEAD_CELL);

        obs
    }

    /// Side length of the (square) grid
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Array shape, with the trailing single-channel dimension kept for
    /// uniformity with image-style consumers
    pub fn shape(&self) -> [usize; 3] {
        [self.grid_size, self.grid_size, 1]
    }

    /// Cell code at (row, col); panics if out of range
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.grid_size + col]
    }

    /// Write a cell code, skipping positions outside the board
    pub(crate) fn write(&mut self, pos: Position, value: u8) {
        let size = self.grid_size as i32;
        if pos.row >= 0 && pos.row < size && pos.col >= 0 && pos.col < size {
            self.cells[pos.row as usize * self.grid_size + pos.col as usize] = value;
        }
    }

    /// Row-major cell codes
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Positions of every cell holding `value`, in row-major order
    pub fn cells_with_value(&self, value: u8) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == value)
            .map(|(idx, _)| {
                Position::new(
                    (idx / self.grid_size) as i32,
                    (idx % self.grid_size) as i32,
                )
            })
            .collect()
    }

    /// Number of cells holding `value`
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }
}
