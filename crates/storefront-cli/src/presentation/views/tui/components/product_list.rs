//! Product List Component
//!
//! Encapsulates product selection and the add-to-cart key.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::ListState,
};

use super::{StorefrontAction, clamp_selection};
use crate::presentation::view_models::StorefrontViewModel;
use crate::presentation::views::tui::product_list::product_row;
use crate::presentation::views::tui::{ProductListView, highlight_width};

const PAGE_SIZE: usize = 5;

pub struct ProductListComponent {
    /// List state (scroll position, selection) - PRIVATE
    state: ListState,
    /// Area of the last draw, for mouse hit testing
    area: Rect,
}

impl ProductListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            area: Rect::default(),
        }
    }

    /// Back to the top, used when the category changes.
    pub fn reset(&mut self) {
        self.state = ListState::default();
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        model: &StorefrontViewModel,
    ) -> Option<StorefrontAction> {
        let len = model.products.len();
        self.state.select(clamp_selection(self.state.selected(), len));

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_by(1, len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_by(-1, len);
                None
            }
            KeyCode::PageDown => {
                self.move_by(PAGE_SIZE as isize, len);
                None
            }
            KeyCode::PageUp => {
                self.move_by(-(PAGE_SIZE as isize), len);
                None
            }
            KeyCode::Home => {
                self.state.select(clamp_selection(Some(0), len));
                None
            }
            KeyCode::End => {
                self.state.select(clamp_selection(Some(usize::MAX), len));
                None
            }
            KeyCode::Enter | KeyCode::Char('a') => self
                .state
                .selected()
                .and_then(|i| model.products.get(i))
                .map(|product| StorefrontAction::AddToCart(product.id)),
            _ => None,
        }
    }

    /// Select the row under a click; a click on its add button also adds
    /// the product.
    pub fn handle_click(
        &mut self,
        position: Position,
        model: &StorefrontViewModel,
    ) -> Option<StorefrontAction> {
        if !self.area.contains(position) {
            return None;
        }
        // One border row above the first item, one border column before it
        let first_row = self.area.y + 1;
        if position.y < first_row {
            return None;
        }
        let index = (position.y - first_row) as usize + self.state.offset();
        let product = model.products.get(index)?;
        self.state.select(Some(index));

        let text_start = self.area.x + 1 + highlight_width();
        let column = position.x.checked_sub(text_start)?;
        product_row(product)
            .add_button
            .contains(&column)
            .then_some(StorefrontAction::AddToCart(product.id))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &StorefrontViewModel) {
        // Index Safety: Clamp selection to data bounds
        self.state
            .select(clamp_selection(self.state.selected(), model.products.len()));
        self.area = area;

        let list = ProductListView::new(model).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.state.select(Some(next as usize));
    }
}

impl Default for ProductListComponent {
    fn default() -> Self {
        Self::new()
    }
}
