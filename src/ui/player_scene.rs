//! Music player UI rendering.

use super::game_common::{
    create_screen_layout, info_line, render_info_panel_frame, render_status_bar, screen_layout,
    Control,
};
use super::throbber::cover_glyph;
use crate::player::{AudioBackend, MusicPlayer};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

const CONTENT_MIN_HEIGHT: u16 = 12;
const INFO_PANEL_WIDTH: u16 = 22;
const ACCENT: Color = Color::Rgb(78, 205, 196);

/// Areas inside the player's content region.
struct PlayerAreas {
    now_playing: Rect,
    progress: Rect,
    volume: Rect,
    playlist: Rect,
}

fn player_areas(content: Rect) -> PlayerAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(content);
    PlayerAreas {
        now_playing: chunks[0],
        progress: chunks[1],
        volume: chunks[2],
        playlist: chunks[3],
    }
}

fn progress_block(current: &str, duration: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {current} / {duration} "))
}

/// The clickable bar of the progress gauge for a screen of size `area`.
pub fn progress_bar_area(area: Rect) -> Rect {
    let layout = screen_layout(area, CONTENT_MIN_HEIGHT, INFO_PANEL_WIDTH);
    let areas = player_areas(layout.content);
    Block::default().borders(Borders::ALL).inner(areas.progress)
}

/// Map a click at column `x` onto the bar: `(offset, width)` when it hits.
pub fn progress_click(area: Rect, x: u16, y: u16) -> Option<(f64, f64)> {
    let bar = progress_bar_area(area);
    let hit = bar.width > 0
        && (bar.x..bar.x + bar.width).contains(&x)
        && (bar.y..bar.y + bar.height).contains(&y);
    hit.then(|| ((x - bar.x) as f64 + 0.5, bar.width as f64))
}

/// Render the music player scene.
pub fn render_player_scene<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    let layout = create_screen_layout(
        frame,
        area,
        " Music Player ",
        ACCENT,
        CONTENT_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );
    let areas = player_areas(layout.content);

    render_now_playing(frame, areas.now_playing, player);
    render_progress(frame, areas.progress, player);
    render_volume(frame, areas.volume, player);
    render_playlist(frame, areas.playlist, player);

    let status = if player.is_playing() {
        ("Playing", Color::Green)
    } else {
        ("Paused", Color::Yellow)
    };
    let controls = [
        Control::new("[Space]", player.play_button_label()),
        Control::new("[←/→]", "Prev/Next"),
        Control::new("[Enter]", "Play selected"),
        Control::new("[+/-]", "Volume"),
        Control::new("[Tab]", "Snake"),
    ];
    render_status_bar(frame, layout.status_bar, status.0, status.1, &controls);

    render_info_panel(frame, layout.info_panel, player);
}

fn render_now_playing<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    let song = player.current_song();
    let clock_ms = (player.audio().current_time().max(0.0) * 1000.0) as u128;
    let disc = cover_glyph(player.cover_spinning(), clock_ms);
    let disc_color = if player.cover_spinning() {
        ACCENT
    } else {
        Color::DarkGray
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {disc} "), Style::default().fg(disc_color)),
            Span::styled(
                song.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(song.artist.clone(), Style::default().fg(Color::Gray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_progress<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    let ratio = (player.progress_percent() / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(progress_block(
            player.current_time_label(),
            player.duration_label(),
        ))
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Rgb(30, 30, 40)))
        .ratio(ratio)
        .label(format!("{:.0}%", player.progress_percent()));
    frame.render_widget(gauge, area);
}

fn render_volume<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    const SLOTS: usize = 20;
    let filled = player.volume_percent() as usize * SLOTS / 100;
    let line = Line::from(vec![
        Span::styled(" Vol ", Style::default().fg(Color::DarkGray)),
        Span::styled("█".repeat(filled), Style::default().fg(ACCENT)),
        Span::styled(
            "░".repeat(SLOTS - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {}%", player.volume_percent()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_playlist<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    let items: Vec<ListItem> = player
        .songs()
        .iter()
        .enumerate()
        .map(|(i, song)| {
            if i == player.current_index() {
                ListItem::new(format!("▶ {}", song.label())).style(
                    Style::default()
                        .fg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", song.label()))
                    .style(Style::default().fg(Color::Gray))
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Playlist ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));

    let mut state = ListState::default();
    state.select(Some(player.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_info_panel<A: AudioBackend>(frame: &mut Frame, area: Rect, player: &MusicPlayer<A>) {
    let inner = render_info_panel_frame(frame, area);
    let white = Style::default().fg(Color::White);
    let lines = vec![
        info_line(
            "Track",
            format!("{}/{}", player.current_index() + 1, player.songs().len()),
            white,
        ),
        info_line("Volume", format!("{}%", player.volume_percent()), white),
        Line::from(""),
        Line::from(Span::styled(
            "Click the progress",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "bar or use [ ] to seek",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
