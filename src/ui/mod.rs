//! Terminal rendering for both screens.

pub mod game_common;
pub mod player_scene;
pub mod snake_scene;
pub mod throbber;

pub use player_scene::{progress_click, render_player_scene};
pub use snake_scene::{render_snake_scene, TerminalRenderer};
