use serde::{Deserialize, Serialize};

/// Direction the snake is currently heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (drow, dcol) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// One rotational step through the Up→Left→Down→Right cycle
    pub fn turned_left(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// One rotational step through the inverse cycle (Up→Right→Down→Left)
    pub fn turned_right(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Apply an action to this heading, returning the new heading
    pub fn apply(&self, action: Action) -> Direction {
        match action {
            Action::TurnLeft => self.turned_left(),
            Action::TurnRight => self.turned_right(),
            Action::Continue => *self,
        }
    }
}

/// Action that can be taken in the game
///
/// Turns are relative to the current heading. Reversing the heading in one
/// tick is unreachable since only one rotational step applies per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Keep the current heading
    Continue,
    /// Rotate one step through Up→Left→Down→Right
    TurnLeft,
    /// Rotate one step through Up→Right→Down→Left
    TurnRight,
}

impl Action {
    /// Convert a discrete action index to an Action
    ///
    /// - 0 → Continue
    /// - 1 → TurnLeft
    /// - 2 → TurnRight
    /// - other → Continue (out-of-domain indices degrade to no turn; a
    ///   documented policy, not an error)
    pub fn from_index(idx: usize) -> Action {
        match idx {
            1 => Action::TurnLeft,
            2 => Action::TurnRight,
            _ => Action::Continue,
        }
    }
}
