use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::dashboard;
use crate::widgets::{help_modal, loading, status_bar};

/// Master render function: dashboard (or placeholder) plus status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    match app.view.display() {
        Some(display) => dashboard::render(frame, &display, app.journal_offset, chunks[0]),
        None => loading::render(frame, chunks[0]),
    }
    status_bar::render(frame, chunks[1], &app.source_label, app.view.is_loading());

    if app.show_help {
        help_modal::render(frame);
    }
}
