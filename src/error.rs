//! Error types for the library.
//!
//! Game over is a game phase, not an error; these cover persistence,
//! configuration and playlist lookups.

use thiserror::Error;

/// Failure reading or writing a persisted value.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration that the game cannot run with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is too small (minimum {min})", min = crate::config::MIN_GRID_SIZE)]
    GridTooSmall(i16),
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("minimum speed must be at least 1ms")]
    ZeroMinSpeed,
    #[error("minimum speed {min_ms}ms exceeds initial speed {initial_ms}ms")]
    SpeedFloorAboveStart { min_ms: u64, initial_ms: u64 },
}

/// Music player errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("no song at index {index} (playlist has {len})")]
    NoSuchSong { index: usize, len: usize },
}
