use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Render the bottom status bar: key hints left, source and state right.
pub fn render(frame: &mut Frame, area: Rect, source: &str, loading: bool) {
    let left = vec![
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw(" Reload  "),
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    let state = if loading { "loading" } else { "live" };
    let right_text = format!("{source} \u{00B7} {state} ");

    // Ratatui doesn't support split alignment in a single Paragraph,
    // so we pad the middle.
    let left_len: usize = left.iter().map(|s| s.content.width()).sum();
    let total_width = area.width as usize;
    let padding = total_width
        .checked_sub(left_len + right_text.width())
        .filter(|p| *p > 0)
        .unwrap_or(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        right_text,
        Style::default().fg(Color::Gray),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
