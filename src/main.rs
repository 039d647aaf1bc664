use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gomoku::config::{AppConfig, GameMode, LoggingConfig};
use gomoku::game::Player;
use gomoku::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play five-in-a-row in the terminal.
#[derive(Parser)]
#[command(name = "gomoku", about = "Five-in-a-row in the terminal", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override the game mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Side played by the computer in vs-ai mode: black or white
    #[arg(long, value_parser = parse_player)]
    ai_player: Option<Player>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Ok(Player::Black),
        "white" => Ok(Player::White),
        other => Err(format!("unknown player '{other}' (expected 'black' or 'white')")),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let (mut config, found) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(player) = cli.ai_player {
        config.game.ai_player = player;
    }
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }

    init_logging(&config.logging)?;
    if found {
        tracing::info!(config = %cli.config.display(), "configuration loaded");
    } else {
        tracing::warn!(config = %cli.config.display(), "config file not found, using defaults");
    }

    run_tui(&config).context("running terminal UI")
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let log_file = File::create(&logging.file)
        .with_context(|| format!("creating log file {}", logging.file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
