// Add and edit forms
//
// Three labelled inputs with the focused one highlighted and a block
// cursor at its end. The edit form shows loading and failure states in
// place of the inputs, plus the inline message of a failed update.

use crate::form::{Field, FormState};
use crate::screens::{AddScreen, EditScreen, EditState};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_add(f: &mut Frame, area: Rect, screen: &AddScreen, theme: &Theme) {
    let block = outer_block(" Add Product ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);
    render_fields(f, inner, &screen.form, screen.focus, None, theme);
}

pub fn render_edit(f: &mut Frame, area: Rect, screen: &EditScreen, theme: &Theme) {
    let title = match screen.id() {
        Some(id) => format!(" Edit Product {} ", id),
        None => " Edit Product ".to_string(),
    };
    let block = outer_block(&title, theme);
    let inner = block.inner(area);

    match screen.state() {
        EditState::Loading => {
            let text = Paragraph::new("Loading product…")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(text, area);
        }
        EditState::Failed(message) => {
            let text = Paragraph::new(message.as_str())
                .style(Style::default().fg(theme.error))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(text, area);
        }
        EditState::Editing(form) => {
            f.render_widget(block, area);
            render_fields(f, inner, form, screen.focus, screen.error.as_deref(), theme);
        }
    }
}

fn outer_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(title.to_string())
}

fn render_fields(
    f: &mut Frame,
    area: Rect,
    form: &FormState,
    focus: Field,
    error: Option<&str>,
    theme: &Theme,
) {
    let mut constraints: Vec<Constraint> = Field::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2)); // Inline error
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_input(f, chunks[i], form.get(field), field, field == focus, theme);
    }

    if let Some(error) = error {
        let text = Paragraph::new(error)
            .style(Style::default().fg(theme.error))
            .wrap(Wrap { trim: true });
        f.render_widget(text, chunks[Field::ALL.len()]);
    }
}

fn render_input(
    f: &mut Frame,
    area: Rect,
    value: &str,
    field: Field,
    focused: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", field.label()));

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(theme.foreground),
        )];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(theme.highlight),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
