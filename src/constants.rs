// Snake grid
pub const GRID_SIZE: i16 = 20;
pub const TILE_SIZE: u16 = 20;
pub const INITIAL_SNAKE_LEN: usize = 3;

// Scoring and speed ramp
pub const FOOD_REWARD: u32 = 10;
pub const INITIAL_SPEED_MS: u64 = 150;
pub const SPEED_STEP_MS: u64 = 5;
pub const MIN_SPEED_MS: u64 = 50;

// Food placement: random probes before falling back to a full scan
pub const MAX_FOOD_ATTEMPTS: usize = 64;

// Scheduler: a single advance never covers more than this (stall after suspend/lag)
pub const MAX_FRAME_DT_MS: u64 = 500;

// Frame loop
pub const FRAME_POLL_MS: u64 = 16;

// Persistence (files under ~/.playdeck/)
pub const DATA_DIR_NAME: &str = ".playdeck";
pub const HIGH_SCORE_FILE: &str = "snake_high_score.json";
pub const CONFIG_FILE: &str = "config.json";

// Music player
pub const DEFAULT_VOLUME_PERCENT: u8 = 100;
pub const VOLUME_STEP_PERCENT: u8 = 5;
pub const SEEK_STEP_FRACTION: f64 = 0.1;
/// Track length reported by the simulated audio backend.
pub const SIMULATED_TRACK_SECS: f64 = 210.0;
