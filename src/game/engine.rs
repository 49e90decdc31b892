use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::action::{Action, Direction};
use super::config::{GameConfig, DEATH_PENALTY, FOOD_REWARD, GROWTH_PER_FOOD};
use super::food;
use super::observation::{Observation, FOOD_CELL};
use super::state::{CollisionType, GameState, Position, Snake};

/// Information about a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Why the episode ended, if it did
    pub collision_type: Option<CollisionType>,
}

impl StepInfo {
    fn none() -> Self {
        Self {
            ate_food: false,
            collision_type: None,
        }
    }
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Encoded post-move world, including any food respawn this tick
    pub observation: Observation,
    /// Reward for this step
    pub reward: f32,
    /// Whether the episode has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that advances the world one tick per action
///
/// Owns the episode RNG, seeded once at construction; `reset` never
/// reseeds, so a seeded engine produces one reproducible stream of food
/// placements across all of its episodes.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    ///
    /// Fails if the configuration is unusable (zero grid size).
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the world to its initial state
    ///
    /// The snake starts as a straight segment of length
    /// `max(grid_size / 6, 2)` heading Left from the center cell, trailing
    /// toward increasing columns. Food is placed by rejection sampling
    /// (the body is short at reset, so the sparse strategy applies).
    pub fn reset(&mut self) -> GameState {
        let center = (self.config.grid_size / 2) as i32;
        let snake = Snake::new(
            Position::new(center, center),
            Direction::Left,
            self.config.initial_snake_length(),
        );

        let food = food::spawn(&mut self.rng, &snake.body, self.config.grid_size, None);

        GameState::new(snake, food, self.config.grid_size)
    }

    /// Execute one tick: turn, move, resolve collisions, reward, re-encode
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                observation: Observation::encode(state),
                reward: 0.0,
                terminated: true,
                info: StepInfo::none(),
            };
        }

        state.snake.direction = state.snake.direction.apply(action);
        let new_head = state.snake.advance();

        let mut collision = None;
        if !state.is_in_bounds(new_head) {
            collision = Some(CollisionType::Wall);
        } else if state.snake.collides_with_interior(new_head) {
            collision = Some(CollisionType::SelfCollision);
        } else if state.snake.len() > self.config.arena_cells() {
            collision = Some(CollisionType::BoardFull);
        }

        let mut observation = Observation::encode(state);
        let mut reward = 0.0;
        let mut ate_food = false;

        if collision.is_some() {
            state.is_alive = false;
            reward = DEATH_PENALTY;
        } else if state.food == Some(new_head) {
            ate_food = true;
            reward = FOOD_REWARD;
            state.score += 1;
            state.snake.pending_growth += GROWTH_PER_FOOD;

            // The dense strategy reads the freshly encoded grid, and the
            // returned observation must already show the replacement food.
            state.food = food::spawn(
                &mut self.rng,
                &state.snake.body,
                self.config.grid_size,
                Some(&observation),
            );
            if let Some(food) = state.food {
                observation.write(food, FOOD_CELL);
            }
        }

        state.steps += 1;

        StepResult {
            observation,
            reward,
            terminated: collision.is_some(),
            info: StepInfo {
                ate_food,
                collision_type: collision,
            },
        }
    }
}
