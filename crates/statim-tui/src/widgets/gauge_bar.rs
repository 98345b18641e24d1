use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Build a horizontal gauge bar exactly `width` cells wide.
///
/// Example output: `[████████░░░░░░]`
///
/// The percentage is shown elsewhere as given; here it only decides how many
/// cells are filled, so values outside 0–100 (and NaN) are limited to the
/// drawable range.
pub fn gauge_line(percentage: f64, width: usize, color: Color) -> Line<'static> {
    let bar_width = width.saturating_sub(2);
    if bar_width == 0 {
        return Line::default();
    }

    let filled_count = filled_cells(percentage, bar_width);
    let empty_count = bar_width - filled_count;

    let filled: String = "\u{2588}".repeat(filled_count); // █
    let empty: String = "\u{2591}".repeat(empty_count); // ░

    Line::from(vec![
        Span::raw("["),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::raw("]"),
    ])
}

fn filled_cells(percentage: f64, bar_width: usize) -> usize {
    if percentage.is_nan() {
        return 0;
    }
    let ratio = percentage.clamp(0.0, 100.0) / 100.0;
    ((bar_width as f64) * ratio).floor() as usize
}
