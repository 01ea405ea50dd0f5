use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use playdeck::constants::{FRAME_POLL_MS, SIMULATED_TRACK_SECS};
use playdeck::input::{app_command, player_input, snake_input, AppCommand};
use playdeck::player::{default_playlist, AudioBackend, MusicPlayer, SimulatedAudio};
use playdeck::snake::{GamePhase, JsonScoreStore, MemoryScoreStore, ScoreStore, SnakeSession};
use playdeck::ui::{progress_click, render_player_scene, TerminalRenderer};
use playdeck::GameConfig;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Snake,
    Player,
}

impl Screen {
    fn other(self) -> Self {
        match self {
            Screen::Snake => Screen::Player,
            Screen::Player => Screen::Snake,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut screen = Screen::Snake;

    if args.len() > 1 {
        match args[1].as_str() {
            "snake" => screen = Screen::Snake,
            "player" => screen = Screen::Player,
            "--version" | "-v" => {
                println!("playdeck {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Playdeck - terminal Snake and music player\n");
                println!("Usage: playdeck [snake|player]\n");
                println!("Commands:");
                println!("  snake      Open the Snake game (default)");
                println!("  player     Open the music player");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Tab switches screens, Esc quits.");
                println!("Settings are read from ~/.playdeck/config.json.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'playdeck --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = GameConfig::load();
    let store: Box<dyn ScoreStore> = match JsonScoreStore::open_default() {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(%err, "high score will not be saved this session");
            Box::new(MemoryScoreStore::default())
        }
    };
    let mut session = SnakeSession::new(config, store, rand::thread_rng());
    let mut player = MusicPlayer::new(
        SimulatedAudio::new(SIMULATED_TRACK_SECS),
        default_playlist(),
    )?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to build terminal backend")?;
    terminal.hide_cursor().ok();

    info!(?screen, "playdeck started");
    let result = run_app(&mut terminal, &mut session, &mut player, screen);

    // Restore terminal
    terminal.show_cursor().ok();
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    ) {
        tracing::error!(?err, "failed to leave alternate screen");
    }

    result
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run_app<S: ScoreStore, R: Rng, A: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut SnakeSession<S, R>,
    player: &mut MusicPlayer<A>,
    mut screen: Screen,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        match screen {
            Screen::Snake => session.render(&mut TerminalRenderer::new(terminal))?,
            Screen::Player => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    render_player_scene(frame, area, player);
                })?;
            }
        }

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match app_command(&key) {
                    Some(AppCommand::Quit) => return Ok(()),
                    Some(AppCommand::SwitchScreen) => {
                        // Leaving a live snake game pauses it; the music keeps playing
                        if screen == Screen::Snake && session.game().phase == GamePhase::Running {
                            session.toggle_pause();
                        }
                        screen = screen.other();
                    }
                    None => match screen {
                        Screen::Snake => {
                            if let Some(input) = snake_input(&key) {
                                session.handle_input(input);
                            }
                        }
                        Screen::Player => {
                            if let Some(input) = player_input(&key) {
                                player.handle_input(input);
                            }
                        }
                    },
                },
                Event::Mouse(mouse)
                    if screen == Screen::Player
                        && mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    let area = terminal.size()?;
                    if let Some((offset, width)) = progress_click(area, mouse.column, mouse.row) {
                        player.seek(offset, width);
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;

        session.update(dt.as_millis() as u64);
        player.advance(dt);
    }
}
