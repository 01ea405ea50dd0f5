//! Key mapping for both screens.
//!
//! Each mapper returns `None` for keys it does not recognise; callers drop
//! those silently.

use crate::player::PlayerInput;
use crate::snake::SnakeInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands handled by the application shell rather than a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    SwitchScreen,
}

pub fn app_command(key: &KeyEvent) -> Option<AppCommand> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppCommand::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppCommand::Quit)
        }
        KeyCode::Tab | KeyCode::BackTab => Some(AppCommand::SwitchScreen),
        _ => None,
    }
}

pub fn snake_input(key: &KeyEvent) -> Option<SnakeInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(SnakeInput::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(SnakeInput::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(SnakeInput::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(SnakeInput::Right),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(SnakeInput::TogglePause)
        }
        KeyCode::Enter => Some(SnakeInput::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeInput::Restart),
        _ => None,
    }
}

pub fn player_input(key: &KeyEvent) -> Option<PlayerInput> {
    match key.code {
        KeyCode::Char(' ') => Some(PlayerInput::TogglePlay),
        KeyCode::Right | KeyCode::Char('n') => Some(PlayerInput::Next),
        KeyCode::Left | KeyCode::Char('b') => Some(PlayerInput::Prev),
        KeyCode::Up => Some(PlayerInput::CursorUp),
        KeyCode::Down => Some(PlayerInput::CursorDown),
        KeyCode::Enter => Some(PlayerInput::SelectCursor),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(PlayerInput::VolumeUp),
        KeyCode::Char('-') => Some(PlayerInput::VolumeDown),
        KeyCode::Char(']') => Some(PlayerInput::SeekForward),
        KeyCode::Char('[') => Some(PlayerInput::SeekBack),
        _ => None,
    }
}
