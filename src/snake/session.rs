//! A snake session: the game plus everything that drives it.
//!
//! The session is the single mutator of [`SnakeGame`]. It owns the tick
//! scheduler, the high-score store and the RNG, and implements the
//! Start / Pause-Resume / Restart control surface.

use super::logic::{self, SnakeInput, TickOutcome};
use super::score_store::ScoreStore;
use super::scheduler::TickScheduler;
use super::types::{GamePhase, SnakeGame};
use super::Renderer;
use crate::config::GameConfig;
use rand::Rng;
use tracing::{info, warn};

/// Enablement and labels of the three control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub pause_label: &'static str,
    pub restart_enabled: bool,
}

/// Start is offered while no game is in progress; Pause doubles as Resume.
pub fn control_state(game: &SnakeGame) -> ControlState {
    let running = game.is_running();
    ControlState {
        start_enabled: !running,
        pause_enabled: running,
        pause_label: if game.is_paused() { "Resume" } else { "Pause" },
        restart_enabled: true,
    }
}

pub struct SnakeSession<S: ScoreStore, R: Rng> {
    game: SnakeGame,
    scheduler: TickScheduler,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: Rng> SnakeSession<S, R> {
    /// Build an idle session. The stored high score is read once, here.
    pub fn new(config: GameConfig, store: S, mut rng: R) -> Self {
        let high_score = match store.get() {
            Ok(score) => score,
            Err(err) => {
                warn!(%err, "could not read high score, starting from 0");
                0
            }
        };
        let game = SnakeGame::new(config, high_score, &mut rng);
        let scheduler = TickScheduler::new(game.speed_ms);
        Self {
            game,
            scheduler,
            store,
            rng,
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn start(&mut self) -> bool {
        let started = logic::start(&mut self.game, &mut self.rng);
        if started {
            info!(high_score = self.game.high_score, "snake game started");
            self.sync_scheduler();
        }
        started
    }

    pub fn toggle_pause(&mut self) -> bool {
        let toggled = logic::toggle_pause(&mut self.game);
        if toggled {
            info!(paused = self.game.is_paused(), "snake pause toggled");
            self.sync_scheduler();
        }
        toggled
    }

    pub fn restart(&mut self) {
        logic::restart(&mut self.game, &mut self.rng);
        info!("snake game restarted");
        self.sync_scheduler();
    }

    /// Route one input. Returns true if anything changed.
    pub fn handle_input(&mut self, input: SnakeInput) -> bool {
        match input {
            SnakeInput::Start => self.start(),
            SnakeInput::TogglePause => self.toggle_pause(),
            SnakeInput::Restart => {
                self.restart();
                true
            }
            dir => logic::process_input(&mut self.game, dir, &mut self.rng),
        }
    }

    /// Advance by `dt_ms` of wall-clock time and run every tick that fell due.
    pub fn update(&mut self, dt_ms: u64) -> Vec<TickOutcome> {
        self.scheduler.advance(dt_ms);
        let mut outcomes = Vec::new();

        while self.scheduler.poll_due() {
            let outcome = logic::tick(&mut self.game, &mut self.rng);
            outcomes.push(outcome);

            match outcome {
                TickOutcome::Ate { new_high_score, .. } => {
                    self.scheduler.set_interval(self.game.speed_ms);
                    if new_high_score {
                        self.publish_high_score();
                    }
                }
                TickOutcome::GameOver {
                    cause,
                    new_high_score,
                } => {
                    info!(
                        score = self.game.score,
                        high_score = self.game.high_score,
                        ?cause,
                        "snake game over"
                    );
                    if new_high_score {
                        self.publish_high_score();
                    }
                    self.scheduler.stop();
                    break;
                }
                TickOutcome::Moved | TickOutcome::Skipped => {}
            }
        }
        outcomes
    }

    pub fn controls(&self) -> ControlState {
        control_state(&self.game)
    }

    pub fn render<D: Renderer>(&self, renderer: &mut D) -> Result<(), D::Error> {
        renderer.draw(&self.game)
    }

    /// Write the in-memory best. Only called when a tick raised it.
    fn publish_high_score(&mut self) {
        let score = self.game.high_score;
        match self.store.set(score) {
            Ok(()) => info!(score, "new high score saved"),
            Err(err) => warn!(%err, score, "could not save high score"),
        }
    }

    fn sync_scheduler(&mut self) {
        if self.game.phase == GamePhase::Running {
            self.scheduler.set_interval(self.game.speed_ms);
            self.scheduler.start();
        } else {
            self.scheduler.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::score_store::test_support::CountingStore;
    use crate::snake::types::{Cell, Direction, GameOverCause};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn session_with(config: GameConfig, stored: u32) -> SnakeSession<CountingStore, ChaCha8Rng> {
        SnakeSession::new(
            config,
            CountingStore::with_value(stored),
            ChaCha8Rng::seed_from_u64(9),
        )
    }

    fn session(stored: u32) -> SnakeSession<CountingStore, ChaCha8Rng> {
        session_with(GameConfig::default(), stored)
    }

    #[test]
    fn test_reads_stored_high_score() {
        let s = session(80);
        assert_eq!(s.game().high_score, 80);
        assert_eq!(s.game().phase, GamePhase::Idle);
    }

    #[test]
    fn test_controls_follow_phase() {
        let mut s = session(0);
        let idle = s.controls();
        assert!(idle.start_enabled);
        assert!(!idle.pause_enabled);
        assert!(idle.restart_enabled);

        s.start();
        let running = s.controls();
        assert!(!running.start_enabled);
        assert!(running.pause_enabled);
        assert_eq!(running.pause_label, "Pause");

        s.toggle_pause();
        let paused = s.controls();
        assert!(!paused.start_enabled);
        assert!(paused.pause_enabled);
        assert_eq!(paused.pause_label, "Resume");
    }

    #[test]
    fn test_no_ticks_before_start() {
        let mut s = session(0);
        assert!(s.update(1000).is_empty());
        assert!(!s.scheduler().is_active());
    }

    #[test]
    fn test_update_runs_due_ticks() {
        let mut s = session(0);
        s.start();
        s.game.food = Cell::new(0, 0);
        let outcomes = s.update(300);
        assert_eq!(outcomes, vec![TickOutcome::Moved, TickOutcome::Moved]);
        assert_eq!(s.game().head(), Cell::new(12, 10));
    }

    #[test]
    fn test_pause_suspends_ticks() {
        let mut s = session(0);
        s.start();
        s.game.food = Cell::new(0, 0);
        s.toggle_pause();
        assert!(s.update(400).is_empty());
        assert_eq!(s.game().head(), Cell::new(10, 10));

        s.toggle_pause();
        assert_eq!(s.update(150).len(), 1);
    }

    #[test]
    fn test_eating_retimes_scheduler_and_saves() {
        let mut s = session(0);
        s.start();
        s.game.food = Cell::new(11, 10);
        let outcomes = s.update(150);
        assert_eq!(
            outcomes,
            vec![TickOutcome::Ate {
                score: 10,
                new_high_score: true
            }]
        );
        assert_eq!(s.scheduler().interval_ms(), 145);
        assert_eq!(s.store().inner.value, 10);
        assert_eq!(s.store().sets, 1);
    }

    #[test]
    fn test_score_below_stored_is_not_written() {
        let mut s = session(500);
        s.start();
        s.game.food = Cell::new(11, 10);
        s.update(150);
        assert_eq!(s.game().score, 10);
        assert_eq!(s.store().inner.value, 500);
        assert_eq!(s.store().sets, 0);
    }

    #[test]
    fn test_game_over_stops_scheduler() {
        let mut s = session(0);
        s.start();
        s.game.snake = [Cell::new(19, 3), Cell::new(18, 3), Cell::new(17, 3)]
            .into_iter()
            .collect();
        let outcomes = s.update(450);
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], TickOutcome::GameOver { .. }));
        assert!(!s.scheduler().is_active());
        assert!(s.controls().start_enabled);
    }

    #[test]
    fn test_directional_input_is_routed() {
        let mut s = session(0);
        assert!(!s.handle_input(SnakeInput::Up));
        s.handle_input(SnakeInput::Start);
        assert!(s.handle_input(SnakeInput::Up));
        assert_eq!(s.game().pending_direction, Direction::Up);
    }

    #[test]
    fn test_store_is_read_once() {
        let mut s = session(0);
        s.start();
        for step in 1..=3 {
            let head = s.game().head();
            s.game.food = Cell::new(head.x + 1, head.y);
            let interval = s.scheduler().interval_ms();
            let outcomes = s.update(interval);
            assert!(matches!(outcomes[0], TickOutcome::Ate { .. }), "bite {step}");
        }
        assert_eq!(s.game().score, 30);
        assert_eq!(s.store().gets.get(), 1);
        assert_eq!(s.store().sets, 3);
        assert_eq!(s.store().inner.value, 30);
    }

    #[test]
    fn test_filling_board_on_record_bite_saves_once() {
        let config = GameConfig {
            grid_size: 5,
            ..Default::default()
        };
        let mut s = session_with(config, 0);
        s.start();
        // Serpentine over every cell but (4,4); head at (3,4) facing right
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
        s.game.snake = cells;
        s.game.food = Cell::new(4, 4);

        let outcomes = s.update(150);
        assert_eq!(
            outcomes,
            vec![TickOutcome::GameOver {
                cause: GameOverCause::BoardFull,
                new_high_score: true
            }]
        );
        assert_eq!(s.store().sets, 1);
        assert_eq!(s.store().inner.value, 10);
    }

    #[test]
    fn test_wall_after_record_bite_does_not_save_again() {
        let mut s = session(0);
        s.start();
        s.game.food = Cell::new(11, 10);
        s.update(150);
        assert_eq!(s.store().sets, 1);

        s.game.snake = [Cell::new(19, 10), Cell::new(18, 10), Cell::new(17, 10)]
            .into_iter()
            .collect();
        let outcomes = s.update(145);
        assert_eq!(
            outcomes,
            vec![TickOutcome::GameOver {
                cause: GameOverCause::Wall,
                new_high_score: false
            }]
        );
        assert_eq!(s.game().high_score, 10);
        assert_eq!(s.store().sets, 1);
        assert_eq!(s.store().gets.get(), 1);
    }
}
