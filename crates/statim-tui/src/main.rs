mod api_client;
mod app;
mod cli;
mod dashboard;
mod loader;
mod ui;
mod widgets;

use std::io::{self, Write as _};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use statim_core::config::Config;
use statim_core::retry::{fetch_with_retry, RetryPolicy};
use statim_core::SnapshotSource;
use statim_telemetry::logging;

use crate::app::App;
use crate::cli::Options;
use crate::loader::Loader;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let opts = Options::parse(&args);

    let cfg = match &opts.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let source_cfg = opts.resolve_source(&cfg.source);
    let source = api_client::source_for(source_cfg.file, &source_cfg.url, cfg.fetch.timeout());
    let policy = cfg.fetch.retry_policy();

    if opts.headless {
        if opts.json_logs {
            logging::init_logging_json("statim-tui", &cfg.general.log_level);
        } else {
            logging::init_logging("statim-tui", &cfg.general.log_level);
        }
        return run_headless(source, &policy);
    }

    let log_path = Config::state_dir().join("statim-tui.log");
    if let Err(e) = logging::init_logging_to_file("statim-tui", &cfg.general.log_level, &log_path) {
        eprintln!("warning: logging disabled, cannot open {}: {e}", log_path.display());
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(source, policy);

    restore_terminal()?;
    result
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(source: Box<dyn SnapshotSource>, policy: RetryPolicy) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source.describe());
    let loader = Loader::spawn(source, policy);

    loop {
        for result in loader.drain() {
            app.apply_result(result);
        }

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.reload_requested {
            app.reload_requested = false;
            if !loader.reload() {
                tracing::warn!("loader thread exited, reload ignored");
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: one load, reported as JSON lines on stdout.
///
/// Usage: `statim-tui --headless [--json-logs] --file public_dashboard.json`
fn run_headless(source: Box<dyn SnapshotSource>, policy: &RetryPolicy) -> Result<()> {
    let mut app = App::new(source.describe());

    emit_event(&serde_json::json!({
        "event": "started",
        "source": app.source_label,
    }));

    app.apply_result(fetch_with_retry(&source, policy, std::thread::sleep));

    match app.view.display() {
        Some(display) => emit_event(&serde_json::json!({
            "event": "loaded",
            "dashboard": display,
        })),
        None => emit_event(&serde_json::json!({
            "event": "loading",
            "error": app.last_error,
        })),
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{}", s);
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
