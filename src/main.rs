use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_four::ai::HeuristicOpponent;
use connect_four::config::AppConfig;
use connect_four::engine::Engine;
use connect_four::game::GameState;
use connect_four::save::SaveManager;
use connect_four::ui::{self, App};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Play line by line on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    headless: bool,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore and delete any saved game
    #[arg(long)]
    fresh: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(path) = cli.log_file {
        config.log.file = Some(path);
    }
    let level = match cli.log_level {
        Some(level) => level,
        None => config
            .log
            .level
            .parse()
            .with_context(|| format!("invalid log level '{}'", config.log.level))?,
    };
    init_logging(level, config.log.file.as_deref(), cli.headless)?;

    let saves = SaveManager::new(config.save.clone());
    let (state, restored) = if cli.fresh {
        saves.discard().context("removing saved game")?;
        (GameState::initial(), false)
    } else {
        match saves.load() {
            Ok(Some(state)) => (state, true),
            Ok(None) => (GameState::initial(), false),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable saved game");
                (GameState::initial(), false)
            }
        }
    };

    let opponent = match config.game.seed {
        Some(seed) => HeuristicOpponent::with_seed(seed),
        None => HeuristicOpponent::new(),
    };
    let mut engine = Engine::with_state(state, Box::new(opponent));
    engine.resume().context("resuming saved game")?;
    info!(restored, seed = ?config.game.seed, "starting game");

    if cli.headless {
        if restored {
            println!("Restored saved game from {}", saves.path().display());
        }
        ui::headless::run(&mut engine, &saves, io::stdin().lock(), io::stdout().lock())?;
        saves.save(engine.state()).context("saving game")?;
        return Ok(());
    }

    let mut app = App::new(
        engine,
        saves,
        config.game.start_column,
        Duration::from_millis(config.ui.tick_rate_ms),
    );
    if restored {
        app.set_message("Restored your saved game");
    }
    let res = run_tui(&mut app);
    finish(&app, res)
}

/// Save the game, then report how the UI exited.
fn finish(app: &App, res: io::Result<()>) -> Result<()> {
    app.shutdown().context("saving game")?;
    res.context("running terminal UI")
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

/// Send logs to `file` if given, otherwise to stderr in headless mode. The
/// full-screen UI owns the terminal, so without a file it logs nothing.
fn init_logging(level: LevelFilter, file: Option<&Path>, headless: bool) -> Result<()> {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    match file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(format)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        None if headless => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(format)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
        None => {}
    }
    Ok(())
}
