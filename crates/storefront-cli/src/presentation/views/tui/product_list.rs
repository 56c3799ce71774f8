//! Product List View
//!
//! One row per product card, ending in the `[Add to Cart]` button. Selection
//! state lives in the component.

use std::ops::Range;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem},
};

use crate::presentation::formatters::{format_cents, truncate};
use crate::presentation::view_models::{ProductCardViewModel, StorefrontViewModel};

use super::{ACCENT, HIGHLIGHT_SYMBOL, MUTED, PRICE, RowBuilder};

const NAME_WIDTH: usize = 18;
const DESCRIPTION_WIDTH: usize = 40;
pub const ADD_LABEL: &str = "[Add to Cart]";

pub struct ProductListView<'a> {
    model: &'a StorefrontViewModel,
}

/// One drawn product row and where its add button sits, in columns from the
/// start of the row text.
pub struct ProductRow {
    pub line: Line<'static>,
    pub add_button: Range<u16>,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a StorefrontViewModel) -> Self {
        Self { model }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "{} ({})",
                self.model.selected_category,
                self.model.products.len()
            ))
            .border_style(Style::default().fg(MUTED))
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self
            .model
            .products
            .iter()
            .map(|product| ListItem::new(product_row(product).line))
            .collect();

        List::new(items)
            .block(self.block())
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            // Rows never shift, so button columns stay put
            .highlight_spacing(HighlightSpacing::Always)
    }
}

pub fn product_row(product: &ProductCardViewModel) -> ProductRow {
    let mut row = RowBuilder::default();
    row.push(Span::raw(format!("{} ", product.image)));
    row.push(Span::styled(
        format!(
            "{:<width$}",
            truncate(&product.name, NAME_WIDTH),
            width = NAME_WIDTH
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    row.push(Span::styled(
        format!("{:>9}", format_cents(product.price_cents)),
        Style::default().fg(PRICE),
    ));
    row.push(Span::raw("  "));
    let add_button = row.push(Span::styled(
        ADD_LABEL,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    row.push(Span::raw("  "));
    row.push(Span::styled(
        format!("{:<12}", product.category),
        Style::default().fg(ACCENT),
    ));
    row.push(Span::styled(
        truncate(&product.description, DESCRIPTION_WIDTH),
        Style::default().fg(MUTED),
    ));

    ProductRow {
        line: row.finish(),
        add_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ProductCardViewModel {
        ProductCardViewModel {
            id: 1,
            name: "Classic White T-Shirt".to_string(),
            category: "Tops".to_string(),
            image: "👕".to_string(),
            description: "Comfortable cotton t-shirt perfect for everyday wear".to_string(),
            price_cents: 2999,
        }
    }

    #[test]
    fn test_add_button_range_covers_label() {
        let row = product_row(&card());
        // emoji (2) + space + name + price + gap
        let start = 2 + 1 + NAME_WIDTH as u16 + 9 + 2;
        assert_eq!(row.add_button, start..start + ADD_LABEL.len() as u16);

        let text: String = row
            .line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains(ADD_LABEL));
    }
}
