//! Playdeck - a terminal Snake game and music player.
//!
//! The game logic, player model and persistence live here so they can be
//! tested without a terminal; `main.rs` only wires them to crossterm.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod player;
pub mod snake;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use error::{ConfigError, PlayerError, StoreError};
pub use player::MusicPlayer;
pub use snake::{SnakeGame, SnakeSession};
