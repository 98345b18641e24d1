use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use statim_core::CardConfig;

/// Render a titled card: rounded border, icon + upper-cased title, wrapped body.
///
/// Body lines wrap rather than truncate.
pub fn render_card(frame: &mut Frame, area: Rect, card: CardConfig<Vec<Line<'_>>>) {
    let block = card_block(&card);
    let body = Paragraph::new(card.content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

/// The bordered frame of a card, without content.
pub fn card_block<T>(card: &CardConfig<T>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", card.heading()))
        .title_style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1))
}

/// Columns available for content inside a card of the given outer width.
pub fn inner_width(area: Rect) -> usize {
    // Two border cells plus one padding cell on each side.
    (area.width as usize).saturating_sub(4)
}
