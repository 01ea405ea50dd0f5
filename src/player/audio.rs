//! Audio backend capability and a clock-only implementation.

use super::types::AudioEvent;
use std::time::Duration;

/// The media element the player drives.
pub trait AudioBackend {
    /// Point at a new source. Stops playback and rewinds.
    fn load(&mut self, src: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// 0.0 ..= 1.0
    fn set_volume(&mut self, volume: f64);
    fn volume(&self) -> f64;
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    /// Track length in seconds; `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;
    fn seek(&mut self, seconds: f64);
    /// Let `dt` of wall time pass and report what happened.
    fn advance(&mut self, dt: Duration) -> Vec<AudioEvent>;
}

/// Plays silence: a position clock over tracks of a fixed length.
///
/// Metadata arrives on the first `advance` after a `load`, like a real media
/// element finishing its header fetch.
#[derive(Debug, Clone)]
pub struct SimulatedAudio {
    track_secs: f64,
    src: Option<String>,
    metadata_loaded: bool,
    metadata_pending: bool,
    paused: bool,
    volume: f64,
    position: f64,
}

impl SimulatedAudio {
    pub fn new(track_secs: f64) -> Self {
        Self {
            track_secs: track_secs.max(0.0),
            src: None,
            metadata_loaded: false,
            metadata_pending: false,
            paused: true,
            volume: 1.0,
            position: 0.0,
        }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl AudioBackend for SimulatedAudio {
    fn load(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.metadata_loaded = false;
        self.metadata_pending = true;
        self.paused = true;
        self.position = 0.0;
    }

    fn play(&mut self) {
        if self.src.is_some() {
            self.paused = false;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.metadata_loaded.then_some(self.track_secs)
    }

    fn seek(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let end = if self.metadata_loaded {
            self.track_secs
        } else {
            0.0
        };
        self.position = seconds.clamp(0.0, end);
    }

    fn advance(&mut self, dt: Duration) -> Vec<AudioEvent> {
        let mut events = Vec::new();
        if self.metadata_pending {
            self.metadata_pending = false;
            self.metadata_loaded = true;
            events.push(AudioEvent::LoadedMetadata);
        }
        if self.paused || !self.metadata_loaded {
            return events;
        }

        self.position = (self.position + dt.as_secs_f64()).min(self.track_secs);
        events.push(AudioEvent::TimeUpdate);
        if self.position >= self.track_secs {
            self.paused = true;
            events.push(AudioEvent::Ended);
        }
        events
    }
}
