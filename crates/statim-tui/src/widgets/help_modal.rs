use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Clear;
use ratatui::Frame;

use statim_core::CardConfig;

use super::card::render_card;

/// Key, action. Kept in sync with `App::on_key`.
pub const KEYBINDINGS: &[(&str, &str)] = &[
    ("j / \u{2193}", "Scroll logs down"),
    ("k / \u{2191}", "Scroll logs up"),
    ("g / Home", "First log entry"),
    ("G / End", "Last log entry"),
    ("r", "Reload snapshot"),
    ("?", "Toggle help"),
    ("Esc", "Close help"),
    ("q", "Quit"),
    ("Ctrl-c", "Quit immediately"),
];

const KEY_COLUMN: usize = 10;
const POPUP_WIDTH: u16 = 40;

/// Keybinding card drawn over the dashboard.
pub fn render(frame: &mut Frame) {
    let area = popup_area(frame.area());
    frame.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<width$}", key, width = KEY_COLUMN), key_style),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled("? or Esc closes", Style::default().fg(Color::DarkGray)));

    render_card(frame, area, CardConfig::new("Keybindings", lines));
}

/// Just tall enough for the bindings plus hint and borders, centred.
fn popup_area(area: Rect) -> Rect {
    let height = KEYBINDINGS.len() as u16 + 4;
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
