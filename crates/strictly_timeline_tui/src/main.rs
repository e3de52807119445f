//! Strictly Timeline - terminal front end
//!
//! Renders the game with ratatui and feeds key presses back into it as
//! commands.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use strictly_timeline::{BoardConfig, GameState};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting Strictly Timeline");

    let config = match &cli.config {
        Some(path) => BoardConfig::from_file(path)
            .with_context(|| format!("Failed to load board config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let game = GameState::from_config(&config).context("Invalid board config")?;
    let app = App::new(game);

    restore_terminal_on_panic();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal on every exit path
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting");
    res
}

/// Logs go to a file so they never interleave with the UI.
///
/// Returns false if a global subscriber was already installed.
fn init_tracing(path: &Path) -> Result<bool> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = &installed {
        eprintln!("Logging to {} disabled: {}", path.display(), e);
    }
    Ok(installed.is_ok())
}

/// Leaves raw mode and the alternate screen before the panic message prints.
fn restore_terminal_on_panic() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best effort, the process is already unwinding.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code)
        {
            debug!(?action, "Key action");
            app.handle(action);
        }
    }
    info!(
        moves = app.game().history().len() - 1,
        step = app.game().current_step(),
        "Quit requested"
    );
    Ok(())
}
