//! Cart Panel Component
//!
//! Selection runs over the cart lines and then the checkout button.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Clear, ListState},
};

use super::{StorefrontAction, clamp_selection};
use crate::presentation::view_models::CartPanelViewModel;
use crate::presentation::views::tui::cart_panel::{CartPanelLayout, line_row};
use crate::presentation::views::tui::{CartPanelView, highlight_width};

pub struct CartPanelComponent {
    /// Selected row; `lines.len()` is the checkout button
    selected: Option<usize>,
    /// Scroll state for the line list
    state: ListState,
    layout: Option<CartPanelLayout>,
}

impl CartPanelComponent {
    pub fn new() -> Self {
        Self {
            selected: None,
            state: ListState::default(),
            layout: None,
        }
    }

    /// Area of the panel as last drawn; `None` while hidden.
    pub fn panel_area(&self) -> Option<Rect> {
        self.layout.map(|layout| layout.panel)
    }

    /// Forget the drawn panel so clicks stop hitting it.
    pub fn hide(&mut self) {
        self.layout = None;
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        panel: &CartPanelViewModel,
    ) -> Option<StorefrontAction> {
        let view = CartPanelView::new(panel);
        let rows = view.row_count();
        self.selected = clamp_selection(self.selected, rows);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = self.selected.map(|i| (i + 1).min(rows.saturating_sub(1)));
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.map(|i| i.saturating_sub(1));
                None
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.selected_line(panel).map(StorefrontAction::IncrementLine)
            }
            KeyCode::Char('-') => self.selected_line(panel).map(StorefrontAction::DecrementLine),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                self.selected_line(panel).map(StorefrontAction::RemoveLine)
            }
            KeyCode::Enter if self.selected == Some(view.checkout_row()) => {
                Some(StorefrontAction::Checkout)
            }
            _ => None,
        }
    }

    /// Clicks inside the panel never close it. The close mark closes, the
    /// checkout button checks out, a line becomes the selection and its
    /// `[-]`, `[+]` and `[Remove]` controls act on it.
    pub fn handle_click(
        &mut self,
        position: Position,
        panel: &CartPanelViewModel,
    ) -> Option<StorefrontAction> {
        let layout = self.layout?;

        if layout.close.contains(position) {
            return Some(StorefrontAction::CloseCart);
        }
        if panel.empty {
            return None;
        }
        if layout.checkout.contains(position) {
            self.selected = Some(panel.lines.len());
            return Some(StorefrontAction::Checkout);
        }
        if !layout.lines.contains(position) {
            return None;
        }
        let index = (position.y - layout.lines.y) as usize + self.state.offset();
        let line = panel.lines.get(index)?;
        self.selected = Some(index);

        let column = position
            .x
            .checked_sub(layout.lines.x + highlight_width())?;
        let row = line_row(line);
        if row.decrement.contains(&column) {
            Some(StorefrontAction::DecrementLine(line.id))
        } else if row.increment.contains(&column) {
            Some(StorefrontAction::IncrementLine(line.id))
        } else if row.remove.contains(&column) {
            Some(StorefrontAction::RemoveLine(line.id))
        } else {
            None
        }
    }

    /// Draw the overlay inside `area` (the space it may cover).
    pub fn render(&mut self, f: &mut Frame, area: Rect, panel: &CartPanelViewModel) {
        let view = CartPanelView::new(panel);
        let layout = view.layout(area);
        self.layout = Some(layout);

        // Index Safety: Clamp selection to data bounds
        self.selected = clamp_selection(self.selected, view.row_count());

        f.render_widget(Clear, layout.panel);
        f.render_widget(view.block(), layout.panel);

        if panel.empty {
            f.render_widget(view.empty_message(), layout.lines);
            return;
        }

        let on_checkout = self.selected == Some(view.checkout_row());
        self.state
            .select(self.selected.filter(|i| *i < panel.lines.len()));
        f.render_stateful_widget(view.build_list(), layout.lines, &mut self.state);
        f.render_widget(view.total(), layout.total);
        f.render_widget(view.checkout(on_checkout), layout.checkout);
    }

    fn selected_line(&self, panel: &CartPanelViewModel) -> Option<u32> {
        self.selected
            .and_then(|i| panel.lines.get(i))
            .map(|line| line.id)
    }
}

impl Default for CartPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}
