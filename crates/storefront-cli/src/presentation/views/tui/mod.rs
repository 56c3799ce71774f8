//! TUI View Components and Stateful Components
//!
//! This module contains:
//! 1. **Views**: Stateless Ratatui Widget implementations (header, filter bar, products, cart panel)
//! 2. **Components**: Stateful components that encapsulate UI state + input + render logic
//!
//! ## Design Principles:
//!
//! ### Views (Stateless):
//! - Take a reference to ViewModel (no ownership)
//! - NO logic or calculations; prices go through `formatters`
//! - Only map ViewModel data to Ratatui widgets
//!
//! ### Components (Stateful):
//! - Encapsulate UI state (ListState, selection, last drawn areas)
//! - Handle keyboard and mouse input
//! - Perform index safety checks
//! - Delegate rendering to Views
//! - Emit actions to parent for anything that touches the cart or filters

pub mod cart_panel;
pub mod components;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod product_list;

pub use cart_panel::CartPanelView;
pub use components::{StorefrontAction, StorefrontComponent};
pub use filter_bar::FilterBarView;
pub use footer::FooterView;
pub use header::HeaderView;
pub use product_list::ProductListView;

use std::ops::Range;

use ratatui::{
    style::Color,
    text::{Line, Span},
};

pub(crate) const ACCENT: Color = Color::Magenta;
pub(crate) const PRICE: Color = Color::Green;
pub(crate) const MUTED: Color = Color::DarkGray;

/// Drawn in front of the selected row. Lists always reserve its width.
pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

pub(crate) fn highlight_width() -> u16 {
    Span::raw(HIGHLIGHT_SYMBOL).width() as u16
}

/// Collects the spans of one list row and reports the columns each span
/// covers, so clickable parts can be hit tested against the drawn text.
#[derive(Default)]
pub(crate) struct RowBuilder {
    spans: Vec<Span<'static>>,
    width: u16,
}

impl RowBuilder {
    pub(crate) fn push(&mut self, span: Span<'static>) -> Range<u16> {
        let start = self.width;
        self.width = self.width.saturating_add(span.width() as u16);
        self.spans.push(span);
        start..self.width
    }

    pub(crate) fn finish(self) -> Line<'static> {
        Line::from(self.spans)
    }
}
