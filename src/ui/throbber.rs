//! Spinner frames for the rotating album cover.

/// Braille spinner characters, one per 100ms.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for a playback clock in milliseconds.
pub fn spinner_char(elapsed_ms: u128) -> char {
    SPINNER[((elapsed_ms / 100) % SPINNER.len() as u128) as usize]
}

/// Disc glyph for the album cover: a turning spinner while playing,
/// a still dot when paused.
pub fn cover_glyph(spinning: bool, elapsed_ms: u128) -> char {
    if spinning {
        spinner_char(elapsed_ms)
    } else {
        '◉'
    }
}
