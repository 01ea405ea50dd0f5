//! Snake game UI rendering.
//!
//! When the terminal is large enough every grid cell is drawn as two columns
//! by one row, with a dotted grid and a round food glyph. Smaller terminals
//! fall back to half-block pixels: two vertical cells are packed into one
//! terminal row using `▀` with fg=top and bg=bottom colors.

use super::game_common::{
    create_screen_layout, info_line, render_centered_prompt, render_game_over_overlay,
    render_info_panel_frame, render_status_bar, Control,
};
use crate::snake::{control_state, GameOverCause, GamePhase, Renderer, SnakeGame};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

// ── Glyphs ───────────────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █
const FOOD_GLYPH: &str = " \u{25CF}"; // ●
const GRID_GLYPH: &str = " \u{00B7}"; // ·

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(120, 255, 120);
const BODY_RGB: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BACKGROUND_RGB: (f64, f64, f64) = (12.0, 12.0, 18.0);
const GRID_LINE: Color = Color::Rgb(40, 40, 52);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Lowest opacity a body segment fades to.
const MIN_BODY_OPACITY: f64 = 0.3;

fn background() -> Color {
    Color::Rgb(
        BACKGROUND_RGB.0 as u8,
        BACKGROUND_RGB.1 as u8,
        BACKGROUND_RGB.2 as u8,
    )
}

/// Opacity of segment `index` (0 = head) in a snake of `len` cells.
///
/// 1.0 at the head falling linearly to `MIN_BODY_OPACITY` at the tail.
pub fn segment_opacity(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 1.0;
    }
    let t = index.min(len - 1) as f64 / (len - 1) as f64;
    1.0 - t * (1.0 - MIN_BODY_OPACITY)
}

/// Body color for segment `index`, blended over the background.
fn body_color(index: usize, len: usize) -> Color {
    let a = segment_opacity(index, len);
    let blend = |fg: f64, bg: f64| (fg * a + bg * (1.0 - a)) as u8;
    Color::Rgb(
        blend(BODY_RGB.0, BACKGROUND_RGB.0),
        blend(BODY_RGB.1, BACKGROUND_RGB.1),
        blend(BODY_RGB.2, BACKGROUND_RGB.2),
    )
}

/// What occupies each cell, indexed `[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Paint {
    Empty,
    Food,
    Segment(Color),
}

fn paint_grid(game: &SnakeGame) -> Vec<Vec<Paint>> {
    let n = game.config.grid_size.max(0) as usize;
    let mut cells = vec![vec![Paint::Empty; n]; n];

    if game.food.in_bounds(game.config.grid_size) {
        cells[game.food.y as usize][game.food.x as usize] = Paint::Food;
    }

    // Tail first so the head wins any overlap
    let len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate().rev() {
        if seg.in_bounds(game.config.grid_size) {
            let color = if i == 0 { HEAD_COLOR } else { body_color(i, len) };
            cells[seg.y as usize][seg.x as usize] = Paint::Segment(color);
        }
    }
    cells
}

/// Draws onto a ratatui terminal.
pub struct TerminalRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TerminalRenderer<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<'_, B> {
    type Error = io::Error;

    fn draw(&mut self, game: &SnakeGame) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_snake_scene(frame, area, game);
        })?;
        Ok(())
    }
}

/// Render the Snake game scene.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if game.phase == GamePhase::GameOver {
        render_snake_game_over(frame, area, game);
        return;
    }

    let layout = create_screen_layout(frame, area, " Snake ", Color::LightGreen, 12, 22);

    render_play_field(frame, layout.content, game);

    match game.phase {
        GamePhase::Idle => render_centered_prompt(frame, layout.content, "[ Press Enter to Start ]"),
        GamePhase::Paused => render_centered_prompt(frame, layout.content, "[ Paused ]"),
        _ => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let grid = game.config.grid_size.max(0) as u16;
    if area.height >= grid + 2 && area.width >= grid * 2 + 2 {
        render_full_cells(frame, area, game);
    } else {
        render_half_blocks(frame, area, game);
    }
}

/// Border rows and columns around a field of `inner_w` x `inner_h`.
fn render_frame(frame: &mut Frame, x: u16, y: u16, inner_w: u16, inner_h: u16, area: Rect, score: u32) {
    let border = Style::default().fg(BORDER_COLOR);

    // Top border carries the score
    let label = format!(" {score} ");
    let label_len = label.chars().count();
    let pad = (inner_w as usize).saturating_sub(label_len + 1);
    let mut top = String::new();
    top.push(BORDER_TL);
    top.extend(std::iter::repeat_n(BORDER_H, pad));
    let mut spans = vec![Span::styled(top, border)];
    if (inner_w as usize) > label_len {
        spans.push(Span::styled(label, Style::default().fg(Color::White)));
        let rest = inner_w as usize - pad - label_len;
        spans.push(Span::styled(
            std::iter::repeat_n(BORDER_H, rest).collect::<String>(),
            border,
        ));
    } else {
        spans.push(Span::styled(
            std::iter::repeat_n(BORDER_H, inner_w as usize - pad).collect::<String>(),
            border,
        ));
    }
    spans.push(Span::styled(BORDER_TR.to_string(), border));
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(x, y, inner_w + 2, 1),
    );

    for row in 0..inner_h {
        let ry = y + 1 + row;
        if ry >= area.y + area.height {
            break;
        }
        let side = Paragraph::new(Span::styled(BORDER_V.to_string(), border));
        frame.render_widget(side.clone(), Rect::new(x, ry, 1, 1));
        frame.render_widget(side, Rect::new(x + inner_w + 1, ry, 1, 1));
    }

    let bot_y = y + 1 + inner_h;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        s.extend(std::iter::repeat_n(BORDER_H, inner_w as usize));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Span::styled(s, border)),
            Rect::new(x, bot_y, inner_w + 2, 1),
        );
    }
}

/// Two columns by one row per cell: dotted grid, round food.
fn render_full_cells(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let cells = paint_grid(game);
    let n = cells.len() as u16;
    let inner_w = n * 2;
    let x_off = area.x + area.width.saturating_sub(inner_w + 2) / 2;
    let y_off = area.y;
    let bg = background();

    render_frame(frame, x_off, y_off, inner_w, n, area, game.score);

    for (gy, row) in cells.iter().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .map(|paint| match paint {
                Paint::Empty => Span::styled(GRID_GLYPH, Style::default().fg(GRID_LINE).bg(bg)),
                Paint::Food => Span::styled(FOOD_GLYPH, Style::default().fg(FOOD_COLOR).bg(bg)),
                Paint::Segment(color) => Span::styled("  ", Style::default().bg(*color)),
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off + 1, y_off + 1 + gy as u16, inner_w, 1),
        );
    }
}

/// Half-block pixels: one column per cell, two cells per row.
fn render_half_blocks(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if area.height < 3 || area.width < 5 {
        return;
    }
    let cells = paint_grid(game);
    let n = cells.len();
    let content_rows = n.div_ceil(2);
    let inner_w = (n as u16).min(area.width.saturating_sub(2));
    let x_off = area.x + area.width.saturating_sub(inner_w + 2) / 2;
    let y_off = area.y;
    let bg = background();

    render_frame(frame, x_off, y_off, inner_w, content_rows as u16, area, game.score);

    let to_color = |paint: &Paint| match paint {
        Paint::Empty => bg,
        Paint::Food => FOOD_COLOR,
        Paint::Segment(color) => *color,
    };
    let empty_row = vec![Paint::Empty; n];

    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let top_row = &cells[term_row * 2];
        let bot_row = cells.get(term_row * 2 + 1).unwrap_or(&empty_row);

        // Batch consecutive cells with the same style
        let mut spans: Vec<Span> = Vec::new();
        let mut cur: Option<(Color, Color)> = None;
        let mut text = String::new();
        for (top, bot) in top_row.iter().zip(bot_row.iter()).take(inner_w as usize) {
            let pair = (to_color(top), to_color(bot));
            if cur != Some(pair) {
                if let Some((fg, bgc)) = cur {
                    spans.push(Span::styled(
                        std::mem::take(&mut text),
                        Style::default().fg(fg).bg(bgc),
                    ));
                }
                cur = Some(pair);
            }
            text.push(HALF_TOP);
        }
        if let Some((fg, bgc)) = cur {
            spans.push(Span::styled(text, Style::default().fg(fg).bg(bgc)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off + 1, row_y, inner_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let controls = control_state(game);
    let buttons = [
        Control::new("[Enter]", "Start").enabled(controls.start_enabled),
        Control::new("[Space]", controls.pause_label).enabled(controls.pause_enabled),
        Control::new("[R]", "Restart").enabled(controls.restart_enabled),
        Control::new("[Tab]", "Player"),
        Control::new("[Esc]", "Quit"),
    ];
    let (status, color) = match game.phase {
        GamePhase::Idle => ("Ready", Color::LightGreen),
        GamePhase::Running => ("Slither!", Color::Green),
        GamePhase::Paused => ("Paused", Color::Yellow),
        GamePhase::GameOver => ("Game over", Color::Red),
    };
    render_status_bar(frame, area, status, color, &buttons);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let inner = render_info_panel_frame(frame, area);
    let white = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        info_line(
            "Score",
            game.score.to_string(),
            white.add_modifier(Modifier::BOLD),
        ),
        info_line("Best", game.high_score.to_string(), Style::default().fg(Color::Yellow)),
        Line::from(""),
        info_line("Length", game.snake.len().to_string(), white),
        info_line("Speed", format!("{}ms", game.speed_ms), white),
        info_line(
            "Grid",
            format!("{0}x{0}", game.config.grid_size),
            white,
        ),
        info_line(
            "Canvas",
            format!("{}px", game.config.canvas_size()),
            white,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(body_color(1, 3))),
            Span::styled("Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!("{FOOD_GLYPH} "), Style::default().fg(FOOD_COLOR)),
            Span::styled("Food", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_snake_game_over(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let message = match game.game_over_cause {
        Some(GameOverCause::BoardFull) => "The snake fills the whole board!".to_string(),
        Some(GameOverCause::SelfCollision) => "The snake bit its own tail.".to_string(),
        Some(GameOverCause::Wall) | None => "The snake hit the wall.".to_string(),
    };
    let detail = if game.score > 0 && game.score >= game.high_score {
        format!("Final score: {}  (new best!)", game.score)
    } else {
        format!("Final score: {}  (best {})", game.score, game.high_score)
    };

    render_game_over_overlay(
        frame,
        area,
        Color::Red,
        "GAME OVER",
        &message,
        &detail,
        "[R] Restart   [Tab] Player   [Esc] Quit",
    );
}
