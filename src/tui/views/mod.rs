// Views module - screen-level rendering
//
// One view per screen, drawn between the title and status bars. Modals and
// toasts are drawn last so they sit on top.

mod form;
mod home;
mod list;
mod modal;

use super::app::App;
use super::components::{status_bar, title_bar};
use crate::screens::Screen;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    match &app.screen {
        Screen::Home => home::render(f, chunks[1], app),
        Screen::List(screen) => list::render(f, chunks[1], screen, &app.theme),
        Screen::Add(screen) => form::render_add(f, chunks[1], screen, &app.theme),
        Screen::Edit(screen) => form::render_edit(f, chunks[1], screen, &app.theme),
    }

    status_bar::render(f, chunks[2], app);

    if let Some(modal) = &app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
