use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use draughts::config::{AppConfig, LoggingConfig};
use draughts::game::{GameOutcome, Notation};
use draughts::ui::{console, App, Session};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play English draughts in the terminal.
#[derive(Parser)]
#[command(name = "draughts", about = "Play English draughts in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "draughts.toml")]
    config: PathBuf,

    /// Use a plain line-oriented console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Override the coordinate notation
    #[arg(long, value_enum)]
    notation: Option<Notation>,

    /// Print the default configuration and exit
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

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(&config.logging, cli.plain)?;

    let notation = cli.notation.unwrap_or(config.console.notation);
    let show_legal = config.console.show_legal_actions;

    if cli.plain {
        let mut session = Session::new(notation);
        let outcome = console::run(&mut session, io::stdin().lock(), io::stdout(), show_legal)
            .context("running console")?;
        if let Some(GameOutcome::Winner(side)) = outcome {
            info!("{} wins", side.name());
        }
        Ok(())
    } else {
        run_tui(App::new(notation, show_legal))
    }
}

/// Configure env_logger from the config, letting `RUST_LOG` take over. The
/// full-screen UI owns stderr, so there logs only go to the configured file.
fn init_logging(logging: &LoggingConfig, plain: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&logging.level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    match &logging.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if !plain => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }

    builder.try_init().context("initialising logger")?;
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
