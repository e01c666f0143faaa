// Title bar component
//
// Renders the app name, the mounted screen and a spinner while a request
// for that screen is outstanding.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let route = app.screen.route();
    let mut spans = vec![
        Span::styled(
            " 🛒 Shelf",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ──── ", Style::default().fg(app.theme.border)),
        Span::styled(route.name(), Style::default().fg(app.theme.foreground)),
    ];
    if app.screen.is_pending() {
        spans.push(Span::styled(
            format!(" {} loading", app.spinner_char()),
            Style::default().fg(app.theme.highlight),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.title))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", app.api_url),
                    Style::default().fg(app.theme.muted),
                ))
                .right_aligned(),
            ),
    );

    f.render_widget(title, area);
}
