use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid, as (row, col)
///
/// Coordinates are signed so a head that just left the board can be
/// represented; in-bounds positions live in `[0, grid_size)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (drow, dcol) = direction.delta();
        self.moved_by(drow, dcol)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0 and tail last
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
    /// Ticks remaining during which the tail pop is suppressed
    pub pending_growth: u32,
}

impl Snake {
    /// Create a new snake with the given head, heading and length
    ///
    /// Body segments trail behind the head, opposite to the heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (drow, dcol) = direction.delta();
        let (back_drow, back_dcol) = (-drow, -dcol);

        let mut body = vec![head];
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_drow, back_dcol));
        }

        Self {
            body,
            direction,
            pending_growth: 0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Advance one cell in the current heading
    ///
    /// With pending growth the tail is kept and the counter decremented by
    /// one, so the body gains a segment; otherwise the tail is popped and
    /// the length stays constant. Returns the new head position.
    pub fn advance(&mut self) -> Position {
        let new_head = self.head().moved_in_direction(self.direction);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
        self.body.insert(0, new_head);

        new_head
    }

    /// Whether a position lands on an interior body segment
    ///
    /// The head itself and the current tail are exempt: the tail may be
    /// vacated the same tick the head arrives, so only indices
    /// `[1, len - 2]` of the post-move body count as a collision.
    pub fn collides_with_interior(&self, pos: Position) -> bool {
        let len = self.body.len();
        len > 2 && self.body[1..len - 1].contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head ran into an interior body segment
    SelfCollision,
    /// Body length exceeded the cell count (board fully occupied)
    BoardFull,
}

/// Complete world state for one episode
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Current food cell; absent only when the board has no free cell
    pub food: Option<Position>,
    pub grid_size: usize,
    /// Number of food pieces eaten this episode
    pub score: u32,
    /// Ticks elapsed this episode
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: Option<Position>, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            grid_size,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.row < self.grid_size as i32
            && pos.col >= 0
            && pos.col < self.grid_size as i32
    }
}
