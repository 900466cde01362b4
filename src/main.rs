mod app;
mod columns;
mod config;
mod error;
mod events;
mod form;
mod import;
mod log;
mod picker;
mod tui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::{App, AppSignal};
use config::Config;
use events::EventHandler;
use form::FormState;
use import::HeaderPosition;

fn print_usage() {
    eprintln!("Usage: bommap [OPTIONS] <part-list.csv>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --header-position <top|bottom>  Where the column-name row sits");
    eprintln!("  -e, --exports-dir <DIR>             Where submissions are written");
    eprintln!("  -h, --help                          Show this help");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut csv_path: Option<PathBuf> = None;
    let mut header_override: Option<HeaderPosition> = None;
    let mut exports_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--header-position" | "-p" => {
                if i + 1 < args.len() {
                    match HeaderPosition::parse(&args[i + 1]) {
                        Some(position) => header_override = Some(position),
                        None => eprintln!(
                            "Warning: invalid header position '{}', expected top or bottom",
                            args[i + 1]
                        ),
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --header-position requires a value");
                    i += 1;
                }
            }
            "--exports-dir" | "-e" => {
                if i + 1 < args.len() {
                    exports_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --exports-dir requires a path argument");
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            arg if !arg.starts_with('-') => {
                csv_path = Some(PathBuf::from(arg));
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    let Some(csv_path) = csv_path else {
        print_usage();
        std::process::exit(2);
    };

    // Load config with precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(exports_override, header_override);

    let imported_columns = import::read_header_columns(&csv_path, config.header_position())
        .with_context(|| format!("failed to import {}", csv_path.display()))?;
    log::log(&format!(
        "Imported {} columns from {}",
        imported_columns.len(),
        csv_path.display()
    ));

    let mut export_available = imported_columns.clone();
    export_available.extend(config.additional_fields());

    let form = FormState::new(&imported_columns, &export_available);
    let mut app = App::new(
        form,
        config.exports_dir(),
        form::submission_stem(&csv_path),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        // One event at a time: the dispatch for event N, including the
        // field projection, completes before event N+1 is read.
        let Some(event) = event_stream.next().await else {
            return Ok(());
        };
        let Ok(event) = event else {
            continue;
        };

        let action = EventHandler::handle_event(app, &event);
        if app.dispatch(action) == AppSignal::Quit {
            return Ok(());
        }
    }
}
