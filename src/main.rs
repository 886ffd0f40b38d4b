//! AgendaBoard - branded meeting agenda board for the terminal
//!
//! Runs the interactive board by default; subcommands export, print, and
//! configure the board without opening the TUI.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use agendaboard::cli::{BoardArgs, CliResult, ConfigArgs, ExportArgs, LogoArgs, SummaryArgs};
use agendaboard::constants::{APP_DESCRIPTION, LOG_FILE_NAME};
use agendaboard::services::RandomIds;
use agendaboard::tui::{self, AppState};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AgendaBoard - branded meeting agenda board for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    board: BoardArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive board (default)
    Tui,
    /// Export the board as an SVG or Markdown document
    Export(ExportArgs),
    /// Generate the organization logo as SVG
    Logo(LogoArgs),
    /// Print the agenda and its summary figures
    Summary(SummaryArgs),
    /// Show or create the configuration file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let board = &cli.board;

    match &cli.command {
        None | Some(Command::Tui) => run_board(board, cli.verbose),
        Some(Command::Export(args)) => run_headless(cli.verbose, || args.execute(board)),
        Some(Command::Logo(args)) => run_headless(cli.verbose, || args.execute(board)),
        Some(Command::Summary(args)) => run_headless(cli.verbose, || args.execute(board)),
        Some(Command::Config(args)) => run_headless(cli.verbose, || args.execute(board)),
    }
}

/// Runs a subcommand, exiting with its error's code on failure.
fn run_headless(verbose: bool, command: impl FnOnce() -> CliResult<()>) -> Result<()> {
    init_stderr_logging(verbose);
    if let Err(e) = command() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
    Ok(())
}

/// Runs the interactive board until the user quits.
fn run_board(board: &BoardArgs, verbose: bool) -> Result<()> {
    let config = board.load_config()?;

    let log_dir = board
        .config_path()?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    if let Err(e) = init_file_logging(&log_dir, verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let mut app_state = AppState::new(config, Box::new(RandomIds))?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;

    tracing::info!("board closed");
    result
}

fn env_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Logs to a file so the alternate screen stays clean.
fn init_file_logging(dir: &Path, verbose: bool) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }
    let path = dir.join(LOG_FILE_NAME);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
