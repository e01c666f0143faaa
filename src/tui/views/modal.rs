// Modal overlay rendering
//
// Modals are drawn centered on top of the screen:
// - Help: keyboard shortcuts and current theme
// - Alert: a message that must be acknowledged
// - ConfirmDelete: yes/no before a product is removed
// - Logs: captured log entries

use crate::logging::LogLevel;
use crate::screens::CONFIRM_DELETE;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Alert(message) => render_alert(f, app, message),
        Modal::ConfirmDelete { name, .. } => render_confirm(f, app, name),
        Modal::Logs { scroll } => render_logs(f, app, *scroll),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(app: &App, title: &'a str, footer: &'a str, color: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(footer).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.product_name);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Products", header_style)),
        kb("↑/↓, j/k", "Move selection"),
        kb("Enter, e", "Edit selected"),
        kb("d, Del", "Delete selected"),
        kb("a", "Add product"),
        kb("r", "Reload list"),
        kb("y", "Copy product id"),
        Line::raw(""),
        Line::from(Span::styled("  Forms", header_style)),
        kb("Tab/↓", "Next field"),
        kb("Shift+Tab/↑", "Previous field"),
        kb("Ctrl+U", "Clear field"),
        kb("Enter", "Save"),
        kb("Esc", "Back to list"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?, F1", "Toggle this help"),
        kb("L, F2", "Show logs"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 27, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(
            app,
            " Help ",
            " Press ? or Esc to close ",
            app.theme.highlight,
        ));
    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, app: &App, message: &str) {
    let width = (message.width() as u16 + 6).clamp(30, 70);
    // Wrapped lines plus padding and borders
    let lines = (message.width() as u16 / width.saturating_sub(4).max(1)) + 1;
    let area = centered_rect(width, lines + 4, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(message)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        )
        .block(modal_block(app, " Notice ", " Enter to dismiss ", app.theme.highlight));
    f.render_widget(paragraph, area);
}

fn render_confirm(f: &mut Frame, app: &App, name: &str) {
    let area = centered_rect(56, 7, f.area());
    f.render_widget(Clear, area);

    let content = vec![
        Line::raw(""),
        Line::raw(CONFIRM_DELETE),
        Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(app.theme.product_name)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        )
        .block(modal_block(app, " Delete ", " y confirm · n cancel ", app.theme.error));
    f.render_widget(paragraph, area);
}

/// `scroll` counts lines up from the newest entry
fn render_logs(f: &mut Frame, app: &App, scroll: usize) {
    let full = f.area();
    let area = centered_rect(full.width * 9 / 10, full.height * 8 / 10, full);
    f.render_widget(Clear, area);

    let entries = app.log_buffer.get_all();
    let visible = area.height.saturating_sub(2) as usize;
    let end = entries.len().saturating_sub(scroll.min(entries.len()));
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => app.theme.error,
                LogLevel::Warn => app.theme.highlight,
                LogLevel::Info => app.theme.success,
                LogLevel::Debug | LogLevel::Trace => app.theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(
                    format!("{} ", entry.target),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(app.theme.foreground)),
            ])
        })
        .collect();

    let title = format!(" Logs ({}) ", entries.len());
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .border_type(app.theme.border_type)
                .title(title)
                .title_bottom(Line::from(" ↑/↓ scroll · Esc close ").centered()),
        );
    f.render_widget(paragraph, area);
}
