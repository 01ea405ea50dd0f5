//! Snake game logic: phase transitions, input processing, movement, collision.

use super::food::place_food;
use super::types::*;
use rand::Rng;
use tracing::debug;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    TogglePause,
    Start,
    Restart,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (idle, paused or over); nothing changed.
    Skipped,
    Moved,
    Ate { score: u32, new_high_score: bool },
    /// `new_high_score` is only ever set when the final bite filled the board.
    GameOver {
        cause: GameOverCause,
        new_high_score: bool,
    },
}

/// Idle -> Running. Starting from game over begins a fresh game.
pub fn start<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> bool {
    match game.phase {
        GamePhase::Idle => {
            game.phase = GamePhase::Running;
            true
        }
        GamePhase::GameOver => {
            game.reset(rng);
            game.phase = GamePhase::Running;
            true
        }
        GamePhase::Running | GamePhase::Paused => false,
    }
}

/// Running <-> Paused. No-op when idle or over.
pub fn toggle_pause(game: &mut SnakeGame) -> bool {
    match game.phase {
        GamePhase::Running => {
            game.phase = GamePhase::Paused;
            true
        }
        GamePhase::Paused => {
            game.phase = GamePhase::Running;
            true
        }
        GamePhase::Idle | GamePhase::GameOver => false,
    }
}

/// Reset the board (high score kept) and start straight away.
pub fn restart<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.reset(rng);
    game.phase = GamePhase::Running;
}

/// Request a turn for the next tick.
///
/// Ignored unless the game is running and unpaused, and ignored when `dir`
/// reverses the committed direction. Checking against the committed rather
/// than the pending direction stops two quick key presses from turning the
/// snake back into itself within one tick.
pub fn set_pending_direction(game: &mut SnakeGame, dir: Direction) -> bool {
    if game.phase != GamePhase::Running || dir == game.direction.opposite() {
        return false;
    }
    game.pending_direction = dir;
    true
}

/// Process player input. Returns true if the game state changed.
pub fn process_input<R: Rng>(game: &mut SnakeGame, input: SnakeInput, rng: &mut R) -> bool {
    match input {
        SnakeInput::Up => set_pending_direction(game, Direction::Up),
        SnakeInput::Down => set_pending_direction(game, Direction::Down),
        SnakeInput::Left => set_pending_direction(game, Direction::Left),
        SnakeInput::Right => set_pending_direction(game, Direction::Right),
        SnakeInput::TogglePause => toggle_pause(game),
        SnakeInput::Start => start(game, rng),
        SnakeInput::Restart => {
            restart(game, rng);
            true
        }
    }
}

/// Advance the game by one cell.
pub fn tick<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> TickOutcome {
    if game.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }

    game.tick_count += 1;
    game.direction = game.pending_direction;
    let new_head = game.head().step(game.direction);

    if !new_head.in_bounds(game.config.grid_size) {
        return end_game(game, GameOverCause::Wall, false);
    }
    // The tail has not moved yet, so it counts as occupied.
    if game.snake.contains(&new_head) {
        return end_game(game, GameOverCause::SelfCollision, false);
    }

    game.snake.push_front(new_head);

    if new_head != game.food {
        game.snake.pop_back();
        return TickOutcome::Moved;
    }

    game.score += game.config.food_reward;
    let new_high_score = game.score > game.high_score;
    if new_high_score {
        game.high_score = game.score;
    }
    game.speed_ms = game.config.next_speed(game.speed_ms);

    match place_food(&game.snake, game.config.grid_size, rng) {
        Some(food) => game.food = food,
        None => return end_game(game, GameOverCause::BoardFull, new_high_score),
    }

    debug!(
        score = game.score,
        speed_ms = game.speed_ms,
        len = game.snake.len(),
        "food eaten"
    );
    TickOutcome::Ate {
        score: game.score,
        new_high_score,
    }
}

fn end_game(game: &mut SnakeGame, cause: GameOverCause, new_high_score: bool) -> TickOutcome {
    game.phase = GamePhase::GameOver;
    game.game_over_cause = Some(cause);
    TickOutcome::GameOver {
        cause,
        new_high_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Create a game that has already been started.
    fn started_game(rng: &mut ChaCha8Rng) -> SnakeGame {
        let mut game = SnakeGame::new(GameConfig::default(), 0, rng);
        start(&mut game, rng);
        game
    }

    fn body(cells: &[(i16, i16)]) -> VecDeque<Cell> {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_idle_blocks_ticks_and_turns() {
        let mut rng = rng();
        let mut game = SnakeGame::new(GameConfig::default(), 0, &mut rng);
        let head_before = game.head();

        assert_eq!(tick(&mut game, &mut rng), TickOutcome::Skipped);
        assert!(!set_pending_direction(&mut game, Direction::Up));
        assert_eq!(game.head(), head_before);
        assert_eq!(game.pending_direction, Direction::Right);
    }

    #[test]
    fn test_start_transitions() {
        let mut rng = rng();
        let mut game = SnakeGame::new(GameConfig::default(), 0, &mut rng);
        assert!(start(&mut game, &mut rng));
        assert_eq!(game.phase, GamePhase::Running);
        // Already running
        assert!(!start(&mut game, &mut rng));
    }

    #[test]
    fn test_toggle_pause() {
        let mut rng = rng();
        let mut game = SnakeGame::new(GameConfig::default(), 0, &mut rng);
        assert!(!toggle_pause(&mut game));
        assert_eq!(game.phase, GamePhase::Idle);

        start(&mut game, &mut rng);
        assert!(toggle_pause(&mut game));
        assert!(game.is_paused());
        assert!(game.is_running());
        assert_eq!(tick(&mut game, &mut rng), TickOutcome::Skipped);

        assert!(toggle_pause(&mut game));
        assert_eq!(game.phase, GamePhase::Running);
    }

    #[test]
    fn test_paused_rejects_direction() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        toggle_pause(&mut game);
        assert!(!set_pending_direction(&mut game, Direction::Up));
        assert_eq!(game.pending_direction, Direction::Right);
    }

    #[test]
    fn test_reverse_rejected_while_moving_right() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        assert!(!set_pending_direction(&mut game, Direction::Left));
        tick(&mut game, &mut rng);
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.direction.delta(), (1, 0));
    }

    #[test]
    fn test_reverse_checked_against_committed_direction() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        // Up is pending but Right is still committed, so Left stays illegal
        assert!(set_pending_direction(&mut game, Direction::Up));
        assert!(!set_pending_direction(&mut game, Direction::Left));
        assert_eq!(game.pending_direction, Direction::Up);
    }

    #[test]
    fn test_reversal_prevented_all_directions() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            game.direction = dir;
            game.pending_direction = dir;
            assert!(!set_pending_direction(&mut game, dir.opposite()));
            assert_eq!(game.pending_direction, dir);
        }
    }

    #[test]
    fn test_move_keeps_length() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.food = Cell::new(0, 0);
        let outcome = tick(&mut game, &mut rng);
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.head(), Cell::new(11, 10));
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_eating_scores_and_speeds_up() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.food = Cell::new(11, 10);

        let outcome = tick(&mut game, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::Ate {
                score: 10,
                new_high_score: true
            }
        );
        assert_eq!(game.score, 10);
        assert_eq!(game.high_score, 10);
        assert_eq!(game.speed_ms, 145);
        assert_eq!(game.snake.len(), 4);
        assert!(!game.snake.contains(&game.food));
    }

    #[test]
    fn test_eating_below_high_score_keeps_it() {
        let mut rng = rng();
        let mut game = SnakeGame::new(GameConfig::default(), 500, &mut rng);
        start(&mut game, &mut rng);
        game.food = Cell::new(11, 10);
        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::Ate {
                score: 10,
                new_high_score: false
            }
        );
        assert_eq!(game.high_score, 500);
    }

    #[test]
    fn test_speed_clamped_at_floor() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.speed_ms = 52;
        game.food = Cell::new(11, 10);
        tick(&mut game, &mut rng);
        assert_eq!(game.speed_ms, 50);

        let next = game.head().step(Direction::Right);
        game.food = next;
        tick(&mut game, &mut rng);
        assert_eq!(game.speed_ms, 50);
    }

    #[test]
    fn test_wall_collision_at_origin() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.snake = body(&[(0, 0), (1, 0), (2, 0)]);
        game.direction = Direction::Left;
        game.pending_direction = Direction::Left;

        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::Wall,
                new_high_score: false
            }
        );
        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.game_over_cause, Some(GameOverCause::Wall));
        // Terminal: nothing more happens
        assert_eq!(tick(&mut game, &mut rng), TickOutcome::Skipped);
        assert_eq!(game.head(), Cell::new(0, 0));
    }

    #[test]
    fn test_wall_collision_far_edges() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.snake = body(&[(19, 5), (18, 5), (17, 5)]);
        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::Wall,
                new_high_score: false
            }
        );

        let mut game = started_game(&mut rng);
        game.snake = body(&[(5, 19), (5, 18), (5, 17)]);
        game.direction = Direction::Down;
        game.pending_direction = Direction::Down;
        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::Wall,
                new_high_score: false
            }
        );
    }

    #[test]
    fn test_self_collision_into_third_segment() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        // Head (5,5) moving down; segment index 3 sits at (5,6)
        game.snake = body(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]);
        game.direction = Direction::Left;
        game.pending_direction = Direction::Down;
        game.food = Cell::new(0, 0);

        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::SelfCollision,
                new_high_score: false
            }
        );
        assert!(game.is_over());
    }

    #[test]
    fn test_moving_into_tail_cell_is_collision() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        // A 2x2 loop: the head's next cell is the current tail
        game.snake = body(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        game.direction = Direction::Left;
        game.pending_direction = Direction::Down;
        game.food = Cell::new(0, 0);

        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::SelfCollision,
                new_high_score: false
            }
        );
    }

    #[test]
    fn test_board_full_ends_game() {
        let mut rng = rng();
        let config = GameConfig {
            grid_size: 5,
            ..Default::default()
        };
        let mut game = SnakeGame::new(config, 0, &mut rng);
        start(&mut game, &mut rng);
        // Serpentine covering everything except (4,4), head at (3,4) facing right
        let mut cells = VecDeque::new();
        for y in 0..5i16 {
            let row: Vec<i16> = if y % 2 == 0 {
                (0..5).collect()
            } else {
                (0..5).rev().collect()
            };
            for x in row {
                if (x, y) != (4, 4) {
                    cells.push_front(Cell::new(x, y));
                }
            }
        }
        game.snake = cells;
        assert_eq!(game.head(), Cell::new(3, 4));
        game.food = Cell::new(4, 4);

        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::BoardFull,
                new_high_score: true
            }
        );
        assert_eq!(game.score, 10);
        assert_eq!(game.snake.len(), 25);
    }

    #[test]
    fn test_restart_from_game_over_keeps_high_score() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.food = Cell::new(11, 10);
        tick(&mut game, &mut rng);
        game.snake = body(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        game.direction = Direction::Up;
        game.pending_direction = Direction::Up;
        tick(&mut game, &mut rng);
        assert!(game.is_over());

        assert!(process_input(&mut game, SnakeInput::Restart, &mut rng));
        assert_eq!(game.phase, GamePhase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 10);
        assert_eq!(game.speed_ms, 150);
    }

    #[test]
    fn test_start_from_game_over_resets() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        game.score = 30;
        game.phase = GamePhase::GameOver;
        assert!(start(&mut game, &mut rng));
        assert_eq!(game.phase, GamePhase::Running);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_process_input_routes_directions() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        assert!(process_input(&mut game, SnakeInput::Up, &mut rng));
        assert_eq!(game.pending_direction, Direction::Up);
        assert!(process_input(&mut game, SnakeInput::TogglePause, &mut rng));
        assert!(game.is_paused());
        assert!(!process_input(&mut game, SnakeInput::Down, &mut rng));
    }

    #[test]
    fn test_random_play_stays_in_bounds() {
        let mut rng = rng();
        let mut game = started_game(&mut rng);
        let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for step in 0..5_000 {
            if game.is_over() {
                restart(&mut game, &mut rng);
            }
            let len_before = game.snake.len();
            set_pending_direction(&mut game, dirs[rng.gen_range(0..4)]);
            let outcome = tick(&mut game, &mut rng);

            match outcome {
                TickOutcome::Moved => assert_eq!(game.snake.len(), len_before),
                TickOutcome::Ate { .. } => assert_eq!(game.snake.len(), len_before + 1),
                _ => {}
            }
            assert!(
                game.snake.iter().all(|c| c.in_bounds(20)),
                "out of bounds at step {step}"
            );
            assert!(!game.snake.contains(&game.food) || game.is_over());
        }
    }
}
