use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use statim_core::{CardConfig, DashboardDisplay, Icon};

use crate::widgets::card::{inner_width, render_card};
use crate::widgets::gauge_bar::gauge_line;

pub const BRAND: &str = "Statim";
pub const TITLE: &str = "System Overview";
pub const FOOTER: &str = "STATIM INTELLIGENCE SYSTEM \u{2022} ENCRYPTED & SECURE";

/// Header, three status cards, journal, footer.
pub fn render(frame: &mut Frame, display: &DashboardDisplay, journal_offset: usize, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(6), // cards
            Constraint::Min(3),    // journal
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, display, rows[0]);
    render_cards(frame, display, rows[1]);
    render_journal(frame, display, journal_offset, rows[2]);

    let footer = Paragraph::new(Line::styled(FOOTER, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, rows[3]);
}

fn render_header(frame: &mut Frame, display: &DashboardDisplay, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let left = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", Icon::Shield.glyph()),
                Style::default().fg(Color::White).bg(Color::Black),
            ),
            Span::styled(format!(" {BRAND}"), bold),
        ]),
        Line::styled(TITLE, bold.fg(Color::White)),
    ];
    let right = vec![
        Line::styled("LATEST UPDATE", Style::default().fg(Color::DarkGray)),
        Line::styled(display.updated_at.clone(), bold.fg(Color::Gray)),
    ];

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

fn render_cards(frame: &mut Frame, display: &DashboardDisplay, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(frame, cols[0], pulse_card(display));
    render_card(frame, cols[1], token_card(display, inner_width(cols[1])));
    render_card(frame, cols[2], sync_card(display));
}

pub fn pulse_card(display: &DashboardDisplay) -> CardConfig<Vec<Line<'static>>> {
    let mut content = vec![Line::from(vec![
        Span::styled("\u{25CF} ", Style::default().fg(Color::Green)),
        Span::styled(
            display.pulse_headline.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    if !display.pulse_status.is_empty() {
        content.push(Line::styled(
            display.pulse_status.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    content.push(Line::styled(
        format!("Last heartbeat: {}", display.last_heartbeat),
        Style::default().fg(Color::Gray),
    ));
    CardConfig::new("Pulse", content).with_icon(Icon::Activity)
}

pub fn token_card(display: &DashboardDisplay, width: usize) -> CardConfig<Vec<Line<'static>>> {
    let count = display.token_count.clone();
    let limit = display.quota_limit.clone();
    let gap = width.saturating_sub(count.chars().count() + limit.chars().count()).max(1);

    let content = vec![
        Line::from(vec![
            Span::styled(count, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(limit, Style::default().fg(Color::DarkGray)),
        ]),
        gauge_line(display.percentage, width, Color::Blue),
        Line::styled(
            display.quota_caption.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    CardConfig::new("Token Usage", content).with_icon(Icon::Cpu)
}

pub fn sync_card(display: &DashboardDisplay) -> CardConfig<Vec<Line<'static>>> {
    let content = vec![
        Line::from(vec![
            Span::styled("\u{26A1} ", Style::default().fg(Color::Yellow)),
            Span::styled(
                display.sync_headline.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(
            format!("Last sync: {}", display.last_sync),
            Style::default().fg(Color::Gray),
        ),
    ];
    CardConfig::new("Notion Sync", content).with_icon(Icon::Refresh)
}

/// One line per entry from `offset` on, in array order, text verbatim.
pub fn journal_lines(journal: &[String], offset: usize) -> Vec<Line<'static>> {
    journal
        .iter()
        .skip(offset)
        .map(|entry| {
            Line::from(vec![
                Span::styled("\u{2022} ", Style::default().fg(Color::LightBlue)),
                Span::styled(entry.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

fn render_journal(frame: &mut Frame, display: &DashboardDisplay, offset: usize, area: Rect) {
    let card = CardConfig::new("Recent Memory Logs", journal_lines(&display.journal, offset))
        .with_icon(Icon::FileText);
    render_card(frame, area, card);
}
