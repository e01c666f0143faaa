// Home view: a short menu into the list and add screens

use crate::tui::app::{App, HOME_ITEMS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" Home ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(4),
            Constraint::Length(HOME_ITEMS.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to Our E-Commerce Site",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Browse the catalog or add your own products!",
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[1]);

    let lines: Vec<Line> = HOME_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            if i == app.home_selected {
                Line::from(Span::styled(
                    format!("▸ {}. {}", i + 1, label),
                    Style::default()
                        .fg(theme.highlight)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}. {}", i + 1, label),
                    Style::default().fg(theme.foreground),
                ))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[2],
    );
}
