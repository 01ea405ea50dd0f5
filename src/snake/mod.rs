//! Snake: grid simulation, food placement, tick scheduling, score store.

pub mod food;
pub mod logic;
pub mod scheduler;
pub mod score_store;
pub mod session;
pub mod types;

pub use logic::{SnakeInput, TickOutcome};
pub use scheduler::TickScheduler;
pub use score_store::{JsonScoreStore, MemoryScoreStore, ScoreStore};
pub use session::{control_state, ControlState, SnakeSession};
pub use types::{Cell, Direction, GameOverCause, GamePhase, SnakeGame};

/// Something that can present a game snapshot.
pub trait Renderer {
    type Error;

    fn draw(&mut self, game: &SnakeGame) -> Result<(), Self::Error>;
}
