// Status bar component
//
// Key hints for the mounted screen on the left, the most recent warning
// or error from the log buffer on the right.

use crate::logging::LogLevel;
use crate::screens::Screen;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Key hints for a screen
pub fn hints(app: &App) -> &'static str {
    match &app.screen {
        Screen::Home => "↑/↓ select │ Enter open │ ? help │ q quit",
        Screen::List(_) => {
            "↑/↓ move │ Enter edit │ d delete │ a add │ r reload │ y copy id │ Esc home"
        }
        Screen::Add(_) => "Tab next field │ Enter save │ Esc back",
        Screen::Edit(screen) if screen.form().is_some() => {
            "Tab next field │ Enter save │ Ctrl+U clear │ Esc back"
        }
        Screen::Edit(_) => "Esc back",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hint_text = format!(" {}", hints(app));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(hint_text.width() as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(hint_text).style(Style::default().fg(app.theme.status_bar)),
        chunks[0],
    );

    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        let color = match entry.level {
            LogLevel::Error => app.theme.error,
            _ => app.theme.highlight,
        };
        let width = chunks[1].width.saturating_sub(1) as usize;
        let text = truncate_to_width(&format!("⚠ {}", entry.message), width);
        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }
}
