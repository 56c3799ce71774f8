//! Cart Panel View
//!
//! Overlay drawn on the right edge when the cart is shown. The rows are the
//! cart lines followed by the checkout button; the component owns which row
//! is selected.

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, Paragraph},
};

use crate::presentation::formatters::{format_cents, truncate};
use crate::presentation::view_models::{CartLineViewModel, CartPanelViewModel};

use super::{ACCENT, HIGHLIGHT_SYMBOL, MUTED, PRICE, RowBuilder};

pub const PANEL_WIDTH: u16 = 62;
pub const CLOSE_LABEL: &str = "✕";
pub const EMPTY_TEXT: &str = "Your cart is empty";
pub const CHECKOUT_LABEL: &str = "Proceed to Checkout";
pub const DECREMENT_LABEL: &str = "[-]";
pub const INCREMENT_LABEL: &str = "[+]";
pub const REMOVE_LABEL: &str = "[Remove]";

const NAME_WIDTH: usize = 14;

pub struct CartPanelView<'a> {
    model: &'a CartPanelViewModel,
}

/// Sub-areas of the drawn panel, kept for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanelLayout {
    pub panel: Rect,
    pub close: Rect,
    pub lines: Rect,
    pub total: Rect,
    pub checkout: Rect,
}

impl<'a> CartPanelView<'a> {
    pub fn new(model: &'a CartPanelViewModel) -> Self {
        Self { model }
    }

    /// Rows the user can move between: each line plus checkout.
    pub fn row_count(&self) -> usize {
        if self.model.empty {
            0
        } else {
            self.model.lines.len() + 1
        }
    }

    pub fn checkout_row(&self) -> usize {
        self.model.lines.len()
    }

    /// Right-aligned overlay inside `area`.
    pub fn panel_area(area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height,
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(Line::styled(
                "Shopping Cart",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title(Line::from(format!(" {} ", CLOSE_LABEL)).right_aligned())
            .border_style(Style::default().fg(ACCENT))
    }

    pub fn layout(&self, area: Rect) -> CartPanelLayout {
        let panel = Self::panel_area(area);
        let inner = self.block().inner(panel);
        let close_width = Line::from(format!(" {} ", CLOSE_LABEL)).width() as u16;
        let close = Rect {
            x: (panel.x + panel.width).saturating_sub(close_width + 1),
            y: panel.y,
            width: close_width,
            height: 1,
        };

        let chunks = Layout::vertical([
            Constraint::Min(0),    // lines
            Constraint::Length(1), // total
            Constraint::Length(1), // checkout
        ])
        .split(inner);

        CartPanelLayout {
            panel,
            close,
            lines: chunks[0],
            total: chunks[1],
            checkout: chunks[2],
        }
    }

    pub fn empty_message(&self) -> Paragraph<'a> {
        Paragraph::new(Line::styled(EMPTY_TEXT, Style::default().fg(MUTED))).centered()
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self
            .model
            .lines
            .iter()
            .map(|line| ListItem::new(line_row(line).line))
            .collect();
        List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
    }

    pub fn total(&self) -> Paragraph<'a> {
        Paragraph::new(Line::from(vec![
            Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format_cents(self.model.total_cents),
                Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
            ),
        ]))
        .right_aligned()
    }

    pub fn checkout(&self, selected: bool) -> Paragraph<'a> {
        let style = if selected {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Line::styled(format!("[ {} ]", CHECKOUT_LABEL), style)).centered()
    }
}

/// One drawn cart line and where its controls sit, in columns from the start
/// of the row text.
pub struct CartLineRow {
    pub line: Line<'static>,
    pub decrement: Range<u16>,
    pub increment: Range<u16>,
    pub remove: Range<u16>,
}

pub fn line_row(line: &CartLineViewModel) -> CartLineRow {
    let control = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut row = RowBuilder::default();
    row.push(Span::raw(format!("{} ", line.image)));
    row.push(Span::styled(
        format!("{:<width$}", truncate(&line.name, NAME_WIDTH), width = NAME_WIDTH),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    row.push(Span::styled(
        format!("{:>8}", format_cents(line.unit_price_cents)),
        Style::default().fg(MUTED),
    ));
    row.push(Span::raw("  "));
    let decrement = row.push(Span::styled(DECREMENT_LABEL, control));
    row.push(Span::raw(format!(" {:>2} ", line.quantity)));
    let increment = row.push(Span::styled(INCREMENT_LABEL, control));
    row.push(Span::raw(" "));
    row.push(Span::styled(
        format!("{:>9}", format_cents(line.subtotal_cents)),
        Style::default().fg(PRICE),
    ));
    row.push(Span::raw(" "));
    let remove = row.push(Span::styled(REMOVE_LABEL, Style::default().fg(Color::Red)));

    CartLineRow {
        line: row.finish(),
        decrement,
        increment,
        remove,
    }
}
