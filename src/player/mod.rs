//! Music player: playlist, transport controls, progress and seeking.

pub mod audio;
pub mod logic;
pub mod types;

pub use audio::{AudioBackend, SimulatedAudio};
pub use logic::{format_time, MusicPlayer, PlayerInput};
pub use types::{default_playlist, AudioEvent, Song};
