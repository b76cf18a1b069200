use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wasd_snake::input::{KeyAction, map_key};
use wasd_snake::{Command, GameConfig, HighScoreStore, JsonFileStore, MemoryStore, Session, Ticker, render};

#[derive(Parser)]
#[command(name = "wasd-snake")]
#[command(version, about = "Classic snake on a 20x20 board")]
struct Cli {
    /// Seed for food placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is kept between runs
    #[arg(long, default_value = "snake_high_score.json")]
    high_score_file: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Write logs to this file (RUST_LOG filters, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let cfg = GameConfig::default();
    if cli.no_save {
        play(make_session(cfg, MemoryStore::default(), cli.seed)?)
    } else {
        let store = JsonFileStore::new(&cli.high_score_file);
        info!(path = %store.path().display(), "high score file");
        play(make_session(cfg, store, cli.seed)?)
    }
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}

fn make_session<S: HighScoreStore>(cfg: GameConfig, store: S, seed: Option<u64>) -> Result<Session<S>> {
    let session = match seed {
        Some(seed) => Session::with_seed(cfg, store, seed),
        None => Session::new(cfg, store),
    };
    session.context("Invalid game configuration")
}

fn play<S: HighScoreStore>(mut session: Session<S>) -> Result<()> {
    // --- Init terminal ---
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;

    let res = run(&mut terminal, &mut session);

    // --- Restore terminal even on error ---
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    res?;
    let snap = session.snapshot();
    println!("Final score: {}  (best: {})", snap.score, snap.high_score);
    Ok(())
}

fn run<S: HighScoreStore>(terminal: &mut Term, session: &mut Session<S>) -> Result<()> {
    let mut ticker = Ticker::new(session.config().tick_period, Instant::now());
    let mut redraw = true;

    loop {
        // --- Render ---
        if redraw {
            let snap = session.snapshot();
            terminal
                .draw(|f| render::draw(f, &snap))
                .context("Failed to draw frame")?;
            redraw = false;
        }

        // --- Input (non-blocking) ---
        if event::poll(ticker.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    KeyAction::Quit => break,
                    KeyAction::Game(cmd) => {
                        let accepted = session.handle(cmd);
                        match cmd {
                            Command::TogglePause => redraw |= accepted,
                            Command::Restart if accepted => {
                                ticker.rearm(Instant::now());
                                redraw = true;
                            }
                            // Turns show up on the next tick.
                            _ => {}
                        }
                    }
                    KeyAction::None => {}
                },
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        // --- Tick ---
        let now = Instant::now();
        if ticker.due(now) {
            let res = session.tick();
            ticker.mark(now);
            redraw = true;
            if res.status.is_over() {
                ticker.cancel();
            }
        }
    }

    ticker.cancel();
    info!("quit");
    Ok(())
}
