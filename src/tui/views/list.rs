// Product list view
//
// One row per product: name, description, price. Loading and failure
// replace the rows entirely; a failed fetch shows its message and nothing
// else.

use crate::product::Product;
use crate::screens::ListScreen;
use crate::sync::ListState;
use crate::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState as SelectionState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PRICE_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, screen: &ListScreen, theme: &Theme) {
    let count = screen.sync.products().len();
    let title = match screen.sync.state() {
        ListState::Ready(_) => format!(" Products ({}) ", count),
        _ => " Products ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(title);

    match screen.sync.state() {
        ListState::Loading => {
            let text = Paragraph::new("Loading products…")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(text, area);
        }
        ListState::Failed(message) => {
            let text = Paragraph::new(message.as_str())
                .style(Style::default().fg(theme.error))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(text, area);
        }
        ListState::Ready(products) if products.is_empty() => {
            let text = Paragraph::new("No products yet. Press a to add one.")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(text, area);
        }
        ListState::Ready(products) => {
            let width = block.inner(area).width as usize;
            let items: Vec<ListItem> = products
                .iter()
                .map(|product| ListItem::new(product_row(product, width, theme)))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");

            let mut selection = SelectionState::default().with_selected(Some(screen.selected));
            f.render_stateful_widget(list, area, &mut selection);
        }
    }
}

/// Name and description share what the price column leaves over
fn product_row<'a>(product: &Product, width: usize, theme: &Theme) -> Line<'a> {
    // Highlight symbol takes two columns
    let available = width.saturating_sub(2 + PRICE_WIDTH);
    let name_width = (available * 2 / 5).max(8);
    let description_width = available.saturating_sub(name_width + 2);

    let name = truncate_to_width(&product.name, name_width);
    let description = truncate_to_width(&product.description, description_width);
    let price = product.price_label();
    let price_style = if product.price.is_some() {
        Style::default().fg(theme.price)
    } else {
        Style::default().fg(theme.muted)
    };

    Line::from(vec![
        Span::styled(
            pad(&name, name_width + 2),
            Style::default()
                .fg(theme.product_name)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            pad(&description, description_width),
            Style::default().fg(theme.foreground),
        ),
        Span::styled(format!("{:>width$}", price, width = PRICE_WIDTH), price_style),
    ])
}

/// Right-pad to `width` display columns
fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(s.width())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_counts_display_columns() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日", 4), "日  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_row_shows_price_label() {
        let product = Product {
            id: "1".into(),
            name: "Lamp".into(),
            description: "Warm light".into(),
            price: None,
        };
        let line = product_row(&product, 80, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Lamp"));
        assert!(text.contains("Warm light"));
        assert!(text.trim_end().ends_with("Price not available"));
    }
}
