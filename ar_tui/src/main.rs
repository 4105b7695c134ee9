//! ar_tui - Interactive TUI for weapon attack rating breakdowns

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "ar_tui", about = "Explore weapon attack rating breakdowns")]
struct Args {
    /// Dataset document (.json or .toml); the bundled sample is used when omitted
    #[arg(short, long, env = "AR_DATA")]
    data: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, env = "AR_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .unwrap_or_else(|| std::env::temp_dir().join("ar_tui"));
    let _guard = setup_logging(&log_dir)?;

    let app = match args.data {
        Some(ref path) => App::from_load(ar_core::load_dataset(path), &path.display().to_string()),
        None => App::from_load(ar_core::bundled_dataset(), "bundled dataset"),
    };

    run(app).context("terminal error")
}

/// Log to a file only; the terminal belongs to the TUI
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory at {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "ar_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/ar_tui.log", log_dir.display());
    Ok(guard)
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::PageUp, _) => app.on_page_up(),
                    (KeyCode::PageDown, _) => app.on_page_down(),
                    (KeyCode::Char(' '), _) => app.toggle_two_hand(),
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
