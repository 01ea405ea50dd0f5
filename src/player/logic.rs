//! Music player logic: playlist navigation, transport, progress and seeking.

use super::audio::AudioBackend;
use super::types::{AudioEvent, Song};
use crate::constants::{DEFAULT_VOLUME_PERCENT, SEEK_STEP_FRACTION, VOLUME_STEP_PERCENT};
use crate::error::PlayerError;
use std::time::Duration;
use tracing::{debug, info, warn};

/// UI-agnostic input actions for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    TogglePlay,
    Next,
    Prev,
    CursorUp,
    CursorDown,
    /// Play the song under the playlist cursor.
    SelectCursor,
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBack,
}

pub struct MusicPlayer<A: AudioBackend> {
    audio: A,
    songs: Vec<Song>,
    current: usize,
    /// Playlist row under the keyboard cursor.
    cursor: usize,
    volume_percent: u8,
    progress_percent: f64,
    current_time_label: String,
    duration_label: String,
}

impl<A: AudioBackend> MusicPlayer<A> {
    /// Load the first song, paused.
    pub fn new(audio: A, songs: Vec<Song>) -> Result<Self, PlayerError> {
        if songs.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        let mut player = Self {
            audio,
            songs,
            current: 0,
            cursor: 0,
            volume_percent: DEFAULT_VOLUME_PERCENT,
            progress_percent: 0.0,
            current_time_label: format_time(0.0),
            duration_label: format_time(f64::NAN),
        };
        player.set_volume(DEFAULT_VOLUME_PERCENT);
        player.load_song(0)?;
        Ok(player)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_song(&self) -> &Song {
        &self.songs[self.current]
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_playing(&self) -> bool {
        !self.audio.is_paused()
    }

    /// The album cover spins only while playing.
    pub fn cover_spinning(&self) -> bool {
        self.is_playing()
    }

    pub fn play_button_label(&self) -> &'static str {
        if self.is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }

    pub fn volume_percent(&self) -> u8 {
        self.volume_percent
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn current_time_label(&self) -> &str {
        &self.current_time_label
    }

    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Point the audio at song `index` and reset progress. Does not play.
    pub fn load_song(&mut self, index: usize) -> Result<(), PlayerError> {
        let song = self.songs.get(index).ok_or(PlayerError::NoSuchSong {
            index,
            len: self.songs.len(),
        })?;
        self.audio.load(&song.src);
        self.current = index;
        self.cursor = index;
        self.progress_percent = 0.0;
        self.current_time_label = format_time(0.0);
        self.duration_label = format_time(f64::NAN);
        info!(index, title = %self.songs[index].title, "song loaded");
        Ok(())
    }

    /// Playlist click: load `index` and start playing.
    pub fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        self.load_song(index)?;
        self.play();
        Ok(())
    }

    pub fn play(&mut self) {
        self.audio.play();
    }

    pub fn pause(&mut self) {
        self.audio.pause();
    }

    pub fn toggle_play(&mut self) {
        if self.audio.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Next song, wrapping to the first, and play it.
    pub fn next(&mut self) {
        let index = (self.current + 1) % self.songs.len();
        self.switch_to(index);
    }

    /// Previous song, wrapping to the last, and play it.
    pub fn prev(&mut self) {
        let index = if self.current == 0 {
            self.songs.len() - 1
        } else {
            self.current - 1
        };
        self.switch_to(index);
    }

    /// Volume slider position, 0..=100 (clamped).
    pub fn set_volume(&mut self, slider: u8) {
        self.volume_percent = slider.min(100);
        self.audio.set_volume(self.volume_percent as f64 / 100.0);
    }

    /// Refresh the progress bar and current-time label from the backend.
    pub fn update_progress(&mut self) {
        let current = self.audio.current_time();
        self.progress_percent = progress_percent(current, self.audio.duration());
        self.current_time_label = format_time(current);
    }

    /// Click on the progress bar at `click_x` of `width`.
    pub fn seek(&mut self, click_x: f64, width: f64) {
        let Some(duration) = self.audio.duration() else {
            return;
        };
        if width <= 0.0 || !duration.is_finite() {
            return;
        }
        let fraction = (click_x / width).clamp(0.0, 1.0);
        self.audio.seek(fraction * duration);
        self.update_progress();
        debug!(seconds = self.audio.current_time(), "seek");
    }

    /// Jump by a fraction of the track (negative seeks back).
    pub fn seek_by_fraction(&mut self, delta: f64) {
        let Some(duration) = self.audio.duration() else {
            return;
        };
        if duration <= 0.0 {
            return;
        }
        let fraction = self.audio.current_time() / duration + delta;
        self.seek(fraction.clamp(0.0, 1.0), 1.0);
    }

    pub fn update_duration(&mut self) {
        self.duration_label = format_time(self.audio.duration().unwrap_or(f64::NAN));
    }

    pub fn handle_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::TimeUpdate => self.update_progress(),
            AudioEvent::Ended => self.next(),
            AudioEvent::LoadedMetadata => self.update_duration(),
        }
    }

    /// Let time pass on the backend and react to whatever it reports.
    pub fn advance(&mut self, dt: Duration) {
        for event in self.audio.advance(dt) {
            self.handle_event(event);
        }
    }

    pub fn handle_input(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::TogglePlay => self.toggle_play(),
            PlayerInput::Next => self.next(),
            PlayerInput::Prev => self.prev(),
            PlayerInput::CursorUp => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(self.songs.len() - 1);
            }
            PlayerInput::CursorDown => {
                self.cursor = (self.cursor + 1) % self.songs.len();
            }
            PlayerInput::SelectCursor => {
                if let Err(err) = self.select(self.cursor) {
                    warn!(%err, "playlist cursor out of range");
                    self.cursor = self.current;
                }
            }
            PlayerInput::VolumeUp => {
                self.set_volume(self.volume_percent.saturating_add(VOLUME_STEP_PERCENT));
            }
            PlayerInput::VolumeDown => {
                self.set_volume(self.volume_percent.saturating_sub(VOLUME_STEP_PERCENT));
            }
            PlayerInput::SeekForward => self.seek_by_fraction(SEEK_STEP_FRACTION),
            PlayerInput::SeekBack => self.seek_by_fraction(-SEEK_STEP_FRACTION),
        }
    }

    fn switch_to(&mut self, index: usize) {
        // `index` is always reduced modulo the playlist length
        if self.load_song(index).is_ok() {
            self.play();
        }
    }
}

/// Percentage of the track played; 0 when the duration is unknown or zero.
pub fn progress_percent(current: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d > 0.0 && d.is_finite() => (current / d * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Format seconds as `M:SS`. Minutes are unbounded; NaN and negatives give "0:00".
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 0.0 {
        return "0:00".to_string();
    }
    if seconds.is_infinite() {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
