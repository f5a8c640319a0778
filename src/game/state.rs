use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::action::Direction;
use super::apple::Apple;
use super::collision::{CollisionType, hits_body, out_of_bounds, overlaps};
use super::config::GameConfig;
use super::geometry::{Grid, Position};
use super::snake::Snake;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    /// Ended by a collision; waits for restart or quit
    GameOver(CollisionType),
}

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The snake moved (false while paused or over)
    pub advanced: bool,
    /// The snake ate the apple this tick
    pub ate_apple: bool,
    /// Collision that ended the game this tick
    pub collision: Option<CollisionType>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    apple: Apple,
    speed: Duration,
    status: Status,
    /// Last segment was appended by the previous tick's growth
    fresh_tail: bool,
}

impl GameState {
    /// Fresh game from a validated configuration
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::new(config.snake_start, config.start_direction);
        let apple = Apple::new(config.apple_start);
        Self::with_parts(config, snake, apple)
    }

    /// Game with an explicit snake and apple, running at base speed
    pub fn with_parts(config: GameConfig, snake: Snake, apple: Apple) -> Self {
        let grid = config.grid();
        let speed = config.base_speed();
        assert!(!speed.is_zero(), "tick interval must be positive");
        Self {
            config,
            grid,
            snake,
            apple,
            speed,
            status: Status::Running,
            fresh_tail: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Apples eaten this game
    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// Current tick interval
    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// Buffer a heading for the next tick. Ignored unless running.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        self.snake.set_direction(direction);
        true
    }

    /// Advance the simulation by one step.
    ///
    /// Order: move, eat, self-collision, wall. A collision switches the
    /// status to `GameOver` and is reported in the outcome. A snake that
    /// already overlaps itself or sits off the board ends the game without
    /// moving.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::default();
        }

        if let Some(cause) = self.detect_collision() {
            self.end(cause);
            return TickOutcome {
                advanced: false,
                ate_apple: false,
                collision: Some(cause),
            };
        }

        let cell = self.grid.cell_size();
        self.snake.advance(cell);
        self.fresh_tail = false;

        let ate_apple = overlaps(self.apple.position(), self.snake.head(), cell);
        if ate_apple {
            self.eat(rng);
        }

        let collision = self.detect_collision();
        if let Some(cause) = collision {
            self.end(cause);
        }

        TickOutcome {
            advanced: true,
            ate_apple,
            collision,
        }
    }

    /// Collision in the current geometry, without moving anything.
    ///
    /// A tail segment grown by the last tick is cosmetic and never counts
    /// as a hit.
    pub fn detect_collision(&self) -> Option<CollisionType> {
        let head = self.snake.head();
        let body = self.snake.body_segments();
        let body = if self.fresh_tail {
            &body[..body.len() - 1]
        } else {
            body
        };

        if hits_body(head, body, self.grid.cell_size()) {
            Some(CollisionType::SelfCollision)
        } else if out_of_bounds(&self.grid, head) {
            Some(CollisionType::Wall)
        } else {
            None
        }
    }

    fn end(&mut self, cause: CollisionType) {
        let head = self.snake.head();
        info!(?cause, score = self.score(), x = head.x, y = head.y, "game over");
        self.status = Status::GameOver(cause);
    }

    /// Flip between running and paused. Returns the new status, or `None`
    /// when the game is over.
    pub fn toggle_pause(&mut self) -> Option<Status> {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver(_) => return None,
        };
        Some(self.status)
    }

    /// Start a fresh game. Only valid from `GameOver`.
    pub fn restart(&mut self) -> bool {
        if !self.is_over() {
            return false;
        }
        info!(final_score = self.score(), "restarting");
        *self = Self::new(self.config.clone());
        true
    }

    fn eat<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let old = self.apple.position();
        if self.config.apple_avoids_snake {
            // A full board leaves the apple where it is
            self.apple
                .relocate_avoiding(&self.grid, self.snake.segments(), rng);
        } else {
            // Never drop the apple back on the cell just eaten
            let single_cell = self.grid.columns() * self.grid.rows() == 1;
            loop {
                self.apple.relocate(&self.grid, rng);
                if single_cell || self.apple.position() != old {
                    break;
                }
            }
        }
        self.snake.grow(self.grid.cell_size());
        self.fresh_tail = true;

        self.speed = self
            .speed
            .saturating_sub(self.config.speed_step())
            .max(self.config.min_speed());
        debug_assert!(!self.speed.is_zero());

        let new = self.apple.position();
        debug!(
            score = self.score(),
            speed_ms = self.speed.as_millis() as u64,
            from = ?(old.x, old.y),
            to = ?(new.x, new.y),
            "apple eaten"
        );
    }

    /// Head position, shorthand for the renderer and tests
    pub fn head(&self) -> Position {
        self.snake.head()
    }
}
