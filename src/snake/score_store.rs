//! Persisted high score.

use crate::constants::HIGH_SCORE_FILE;
use crate::error::StoreError;
use crate::utils::persistence::{self, load_json, save_json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Get/set of a single persisted integer.
pub trait ScoreStore {
    fn get(&self) -> Result<u32, StoreError>;
    fn set(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn get(&self) -> Result<u32, StoreError> {
        (**self).get()
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).set(score)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// High score kept as `{ "high_score": n }` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `~/.playdeck/snake_high_score.json`.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(persistence::data_dir()?.join(HIGH_SCORE_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        Ok(load_json::<HighScoreFile>(&self.path)?
            .unwrap_or_default()
            .high_score)
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        save_json(&self.path, &HighScoreFile { high_score: score })
    }
}

/// Volatile store for tests and for running without a home directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: u32,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self { value }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        Ok(self.value)
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = score;
        Ok(())
    }
}
