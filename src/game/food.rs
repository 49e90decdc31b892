//! Food placement
//!
//! Two strategies behind one entry point. Rejection sampling is cheap while
//! the board is mostly empty but its expected retry count diverges as free
//! space shrinks, so once the snake covers two-thirds of the cells the
//! spawner switches to enumerating the empty cells of the occupancy grid
//! and picking one uniformly.

use rand::Rng;

use super::observation::{Observation, EMPTY_CELL};
use super::state::Position;

/// Whether occupancy is high enough to require the dense strategy
pub fn dense_threshold_reached(snake_len: usize, grid_size: usize) -> bool {
    snake_len >= 2 * grid_size * grid_size / 3
}

/// Choose a new food cell, never on a snake segment
///
/// Uses the dense (enumeration) strategy when an occupancy observation is
/// supplied and the snake covers at least two-thirds of the board; uniform
/// rejection sampling otherwise. Returns `None` only when no cell is free,
/// which is a valid full-board result rather than an error.
pub fn spawn<R: Rng>(
    rng: &mut R,
    body: &[Position],
    grid_size: usize,
    occupancy: Option<&Observation>,
) -> Option<Position> {
    if let Some(obs) = occupancy {
        if dense_threshold_reached(body.len(), grid_size) {
            return spawn_dense(rng, obs);
        }
    }
    Some(spawn_sparse(rng, body, grid_size))
}

/// Uniform rejection sampling over the whole board
///
/// Unbounded retries; callers only reach this while occupancy is below the
/// dense threshold, where the expected retry count stays small.
fn spawn_sparse<R: Rng>(rng: &mut R, body: &[Position], grid_size: usize) -> Position {
    loop {
        let pos = Position::new(
            rng.gen_range(0..grid_size as i32),
            rng.gen_range(0..grid_size as i32),
        );
        if !body.contains(&pos) {
            return pos;
        }
    }
}

/// Uniform choice among the empty cells of the occupancy grid
fn spawn_dense<R: Rng>(rng: &mut R, occupancy: &Observation) -> Option<Position> {
    let empty = occupancy.cells_with_value(EMPTY_CELL);
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_range(0..empty.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::observation::Observation;
    use crate::game::state::{GameState, Snake};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_threshold_boundary() {
        // 36 cells: dense from length 24 up
        assert!(!dense_threshold_reached(23, 6));
        assert!(dense_threshold_reached(24, 6));
        assert!(dense_threshold_reached(36, 6));
    }

    #[test]
    fn test_sparse_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position::new(5, 5), Direction::Left, 4);

        for _ in 0..100 {
            let pos = spawn(&mut rng, &snake.body, 10, None).unwrap();
            assert!(!snake.body.contains(&pos));
            assert!(pos.row >= 0 && pos.row < 10 && pos.col >= 0 && pos.col < 10);
        }
    }

    /// Board coiled full except one cell: rejection sampling would spin
    /// nearly forever, so completing at all exercises the dense path.
    #[test]
    fn test_dense_finds_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid_size = 4;

        let mut body = Vec::new();
        for row in 0..grid_size as i32 {
            for col in 0..grid_size as i32 {
                if (row, col) != (3, 3) {
                    body.push(Position::new(row, col));
                }
            }
        }
        let mut snake = Snake::new(body[0], Direction::Left, 2);
        snake.body = body;
        let state = GameState::new(snake, None, grid_size);
        let obs = Observation::encode(&state);

        let pos = spawn(&mut rng, &state.snake.body, grid_size, Some(&obs));
        assert_eq!(pos, Some(Position::new(3, 3)));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid_size = 3;

        let mut body = Vec::new();
        for row in 0..grid_size as i32 {
            for col in 0..grid_size as i32 {
                body.push(Position::new(row, col));
            }
        }
        let mut snake = Snake::new(body[0], Direction::Left, 2);
        snake.body = body;
        let state = GameState::new(snake, None, grid_size);
        let obs = Observation::encode(&state);

        let pos = spawn(&mut rng, &state.snake.body, grid_size, Some(&obs));
        assert_eq!(pos, None);
    }

    #[test]
    fn test_sparse_used_below_threshold() {
        // With an observation supplied but occupancy below two-thirds the
        // sparse path runs; the result may land on cells the observation
        // marks occupied only if they are not snake cells, so it still
        // never lands on the body.
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position::new(3, 3), Direction::Left, 3);
        let state = GameState::new(snake, None, 6);
        let obs = Observation::encode(&state);

        for _ in 0..50 {
            let pos = spawn(&mut rng, &state.snake.body, 6, Some(&obs)).unwrap();
            assert!(!state.snake.body.contains(&pos));
        }
    }
}
