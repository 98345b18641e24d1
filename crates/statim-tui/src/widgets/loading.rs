use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading dashboard\u{2026}";

/// Placeholder shown until the first snapshot arrives: a dot and a bar in
/// the shape of the pulse skeleton, with a caption underneath.
pub fn render(frame: &mut Frame, area: Rect) {
    let [center] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);

    let skeleton = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::styled("\u{25CF}", skeleton), // ●
        Line::from(""),
        Line::styled("\u{2580}".repeat(16), skeleton), // ▀
        Line::from(""),
        Line::styled(LOADING_TEXT, Style::default().fg(Color::Gray)),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );
}
