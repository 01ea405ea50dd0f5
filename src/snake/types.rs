//! Snake game data structures.
//!
//! The snake moves on a square grid, eats food to grow and score, and speeds
//! up a little with every bite.

use super::food::place_food;
use crate::config::GameConfig;
use crate::constants::INITIAL_SNAKE_LEN;
use rand::Rng;
use std::collections::VecDeque;

/// Game phase. Ticks are only processed while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell; nowhere left to put food.
    BoardFull,
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction` (may be off the grid).
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(&self, grid_size: i16) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

/// Complete state of one snake game.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub game_over_cause: Option<GameOverCause>,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// Committed movement direction.
    pub direction: Direction,
    /// Requested direction, applied at the start of the next tick.
    pub pending_direction: Direction,

    pub food: Cell,

    pub score: u32,
    /// Best score seen, carried over from the score store and across restarts.
    pub high_score: u32,

    /// Current tick interval in milliseconds (lower = faster).
    pub speed_ms: u64,
    /// Ticks processed this game.
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create an idle game: snake centred, 3 segments long, facing right.
    pub fn new<R: Rng>(config: GameConfig, high_score: u32, rng: &mut R) -> Self {
        let mut game = Self {
            config,
            phase: GamePhase::Idle,
            game_over_cause: None,
            snake: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            // Temporary food position; overwritten in reset
            food: Cell::new(0, 0),
            score: 0,
            high_score,
            speed_ms: config.initial_speed_ms,
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    /// Return to `Idle` with a fresh board. Only `high_score` survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let center = self.config.grid_size / 2;
        self.snake = (0..INITIAL_SNAKE_LEN as i16)
            .map(|i| Cell::new(center - i, center))
            .collect();
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.speed_ms = self.config.initial_speed_ms;
        self.tick_count = 0;
        self.phase = GamePhase::Idle;
        self.game_over_cause = None;
        // A fresh 3-cell snake never fills a valid grid
        if let Some(food) = place_food(&self.snake, self.config.grid_size, rng) {
            self.food = food;
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// A game is running from start until game over, paused or not.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
