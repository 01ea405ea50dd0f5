//! Snake game configuration.
//!
//! Defaults come from [`crate::constants`]; `~/.playdeck/config.json` may
//! override any subset of fields.

use crate::constants::*;
use crate::error::ConfigError;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Smallest grid that fits the starting snake plus a food cell on its row.
pub const MIN_GRID_SIZE: i16 = 5;

/// Tunables for one snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid.
    pub grid_size: i16,
    /// Pixel size of one cell on a pixel canvas. The terminal draws cells as
    /// glyphs, so this only feeds the canvas size shown in the info panel.
    pub tile_size: u16,
    /// Points per food eaten.
    pub food_reward: u32,
    /// Tick interval at the start of a game.
    pub initial_speed_ms: u64,
    /// Interval reduction per food eaten.
    pub speed_step_ms: u64,
    /// Interval floor.
    pub min_speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tile_size: TILE_SIZE,
            food_reward: FOOD_REWARD,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_step_ms: SPEED_STEP_MS,
            min_speed_ms: MIN_SPEED_MS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinSpeed);
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::SpeedFloorAboveStart {
                min_ms: self.min_speed_ms,
                initial_ms: self.initial_speed_ms,
            });
        }
        Ok(())
    }

    /// Side length of the square canvas in pixels, for display.
    pub fn canvas_size(&self) -> u32 {
        self.grid_size as u32 * self.tile_size as u32
    }

    /// Interval after one more food, clamped at the floor.
    pub fn next_speed(&self, speed_ms: u64) -> u64 {
        speed_ms
            .saturating_sub(self.speed_step_ms)
            .max(self.min_speed_ms)
    }

    /// Load from a JSON file, falling back to defaults when the file is
    /// missing, unreadable or invalid.
    pub fn load_from(path: &Path) -> Self {
        let config = match persistence::load_json::<GameConfig>(path) {
            Ok(Some(config)) => config,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable config");
                return Self::default();
            }
        };
        match config.validate() {
            Ok(()) => {
                info!(path = %path.display(), "loaded game config");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Load `~/.playdeck/config.json`.
    pub fn load() -> Self {
        match persistence::data_dir() {
            Ok(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            Err(err) => {
                warn!(%err, "no data directory, using default config");
                Self::default()
            }
        }
    }
}
