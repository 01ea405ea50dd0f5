//! Music player data structures.

/// One playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// URL or path of the audio file.
    pub src: String,
    /// URL or path of the album cover.
    pub cover: String,
}

impl Song {
    pub fn new(title: &str, artist: &str, src: &str, cover: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            src: src.to_string(),
            cover: cover.to_string(),
        }
    }

    /// Playlist line, "title - artist".
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }
}

/// The built-in playlist.
pub fn default_playlist() -> Vec<Song> {
    vec![
        Song::new(
            "夏天的风",
            "温岚",
            "https://example.com/song1.mp3",
            "https://via.placeholder.com/300/FF6B6B/FFFFFF?text=夏天的风",
        ),
        Song::new(
            "晴天",
            "周杰伦",
            "https://example.com/song2.mp3",
            "https://via.placeholder.com/300/4ECDC4/FFFFFF?text=晴天",
        ),
        Song::new(
            "光年之外",
            "G.E.M.邓紫棋",
            "https://example.com/song3.mp3",
            "https://via.placeholder.com/300/45B7D1/FFFFFF?text=光年之外",
        ),
    ]
}

/// Events raised by an audio backend while it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Duration became known after a load.
    LoadedMetadata,
    /// Playback position moved.
    TimeUpdate,
    /// Reached the end of the track.
    Ended,
}
