//! Render tests for the dashboard screen.
//!
//! Each test draws the full UI into a 120x40 terminal buffer and checks the
//! text that ends up on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use statim_core::snapshot::{ActiveState, Pulse, TokenUsage};
use statim_core::{DashboardSnapshot, FetchError};

// Include binary-crate modules via path for testing.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/dashboard.rs"]
mod dashboard;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Naive timestamps are read as local time, so the rendered clock values
/// do not depend on the machine's time zone.
fn snapshot(current_usage: i64, percentage: f64, journal: &[&str]) -> DashboardSnapshot {
    DashboardSnapshot {
        pulse: Pulse {
            last_heartbeat: "2025-06-01T14:05:09".into(),
            status: "nominal".into(),
        },
        token_usage: TokenUsage {
            daily_limit: 1_000_000,
            current_usage,
            percentage,
        },
        active_state: ActiveState {
            notion_sync: "2025-06-01T13:58:00".into(),
            is_active: true,
        },
        journal: journal.iter().map(|s| s.to_string()).collect(),
        updated_at: "2025-06-01T14:06:30".into(),
    }
}

fn loaded_app(snap: DashboardSnapshot) -> app::App {
    let mut app = app::App::new("file://public_dashboard.json");
    app.apply_result(Ok(snap));
    app
}

fn render_to_string(app: &app::App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    buffer_to_string(&buf)
}

/// Convert a ratatui Buffer to a readable string (rows joined by newlines).
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected to find {:?} in rendered output.\nFull output:\n{}",
        needle,
        output
    );
}

fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert_contains(output, needle);
    }
}

fn assert_absent(output: &str, needle: &str) {
    assert!(
        !output.contains(needle),
        "Did not expect {:?} in rendered output.\nFull output:\n{}",
        needle,
        output
    );
}

// ===========================================================================
// Loading
// ===========================================================================

#[test]
fn fresh_app_shows_placeholder() {
    let app = app::App::new("http://127.0.0.1:3000/public_dashboard.json");
    let output = render_to_string(&app);
    assert_contains(&output, widgets::loading::LOADING_TEXT);
    assert_absent(&output, dashboard::TITLE);
}

#[test]
fn failed_fetch_keeps_placeholder() {
    let mut app = app::App::new("http://127.0.0.1:3000/public_dashboard.json");
    app.apply_result(Err(FetchError::Network("connection refused".into())));
    let output = render_to_string(&app);
    assert_contains(&output, widgets::loading::LOADING_TEXT);
    // The failure is not surfaced on screen.
    assert_absent(&output, "connection refused");
}

#[test]
fn loaded_app_hides_placeholder() {
    let output = render_to_string(&loaded_app(snapshot(1_000, 1.0, &["x"])));
    assert_absent(&output, widgets::loading::LOADING_TEXT);
    assert_contains_all(&output, &[dashboard::BRAND, dashboard::TITLE, "LATEST UPDATE"]);
}

// ===========================================================================
// Cards
// ===========================================================================

#[test]
fn cards_show_titles() {
    let output = render_to_string(&loaded_app(snapshot(0, 0.0, &[])));
    assert_contains_all(
        &output,
        &["PULSE", "TOKEN USAGE", "NOTION SYNC", "RECENT MEMORY LOGS"],
    );
}

#[test]
fn token_card_shows_floored_count_and_percentage() {
    let output = render_to_string(&loaded_app(snapshot(42_500, 37.0, &[])));
    assert_contains(&output, "42k");
    assert_contains(&output, "/ 1M limit");
    assert_contains(&output, "37% of daily quota used");
}

#[test]
fn percentage_is_shown_unclamped() {
    let output = render_to_string(&loaded_app(snapshot(1_200_000, 120.0, &[])));
    assert_contains(&output, "1200k");
    assert_contains(&output, "120% of daily quota used");
}

#[test]
fn timestamps_render_as_time_of_day() {
    let output = render_to_string(&loaded_app(snapshot(0, 0.0, &[])));
    assert_contains(&output, "Last heartbeat: 2:05:09 PM");
    assert_contains(&output, "Last sync: 1:58:00 PM");
    assert_contains(&output, "2:06:30 PM");
}

#[test]
fn invalid_timestamp_shows_invalid_date() {
    let mut snap = snapshot(0, 0.0, &[]);
    snap.pulse.last_heartbeat = "whenever".into();
    let output = render_to_string(&loaded_app(snap));
    assert_contains(&output, "Last heartbeat: Invalid Date");
}

#[test]
fn headlines_ignore_display_only_flags() {
    let mut snap = snapshot(0, 0.0, &[]);
    snap.active_state.is_active = false;
    let output = render_to_string(&loaded_app(snap));
    assert_contains_all(&output, &["Active", "Synced", "nominal"]);
}

// ===========================================================================
// Journal
// ===========================================================================

#[test]
fn journal_entries_render_in_order() {
    let output = render_to_string(&loaded_app(snapshot(
        0,
        0.0,
        &["alpha-entry", "bravo-entry", "charlie-entry"],
    )));
    assert_eq!(output.matches("-entry").count(), 3);

    let a = output.find("alpha-entry").unwrap();
    let b = output.find("bravo-entry").unwrap();
    let c = output.find("charlie-entry").unwrap();
    assert!(a < b && b < c, "journal out of order:\n{output}");
}

#[test]
fn journal_text_is_verbatim() {
    let output = render_to_string(&loaded_app(snapshot(0, 0.0, &["**not bold** `code`"])));
    assert_contains(&output, "**not bold** `code`");
}

#[test]
fn scrolling_skips_leading_entries() {
    let mut app = loaded_app(snapshot(0, 0.0, &["alpha-entry", "bravo-entry"]));
    app.on_key(key(KeyCode::Char('j')));
    let output = render_to_string(&app);
    assert_absent(&output, "alpha-entry");
    assert_contains(&output, "bravo-entry");
}

// ===========================================================================
// Replacement and overlays
// ===========================================================================

#[test]
fn reload_replaces_every_field() {
    let mut app = loaded_app(snapshot(42_500, 37.0, &["old-entry-1", "old-entry-2"]));
    let mut next = snapshot(7_000, 80.0, &["fresh-entry"]);
    next.pulse.status = "recovered".into();
    app.apply_result(Ok(next));

    let output = render_to_string(&app);
    assert_contains_all(&output, &["7k", "80% of daily quota used", "fresh-entry", "recovered"]);
    assert_absent(&output, "42k");
    assert_absent(&output, "37% of daily quota used");
    assert_absent(&output, "old-entry");
    assert_absent(&output, "nominal");
}

#[test]
fn help_overlay_lists_keys() {
    let mut app = loaded_app(snapshot(0, 0.0, &[]));
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&app);
    assert_contains_all(&output, &["KEYBINDINGS", "Reload snapshot", "Quit immediately"]);
}

#[test]
fn status_bar_shows_source_and_state() {
    let app = app::App::new("file://public_dashboard.json");
    let output = render_to_string(&app);
    assert_contains_all(&output, &["file://public_dashboard.json", "loading", "[q]"]);

    let output = render_to_string(&loaded_app(snapshot(0, 0.0, &[])));
    assert_contains(&output, "live");
}

#[test]
fn small_terminal_does_not_panic() {
    let app = loaded_app(snapshot(42_500, 37.0, &["a", "b", "c"]));
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}
