//! Header View
//!
//! Store name on the left, cart badge on the right, page title on the border.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StorefrontViewModel;

use super::ACCENT;

pub struct HeaderView<'a> {
    model: &'a StorefrontViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a StorefrontViewModel) -> Self {
        Self { model }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(self.model.page.title.as_str())
            .border_style(Style::default().fg(ACCENT))
    }

    /// Where the cart badge lands inside `area`; the badge is clickable.
    pub fn badge_area(&self, area: Rect) -> Rect {
        let inner = self.block().inner(area);
        let badge_width = Line::from(self.model.cart_badge.label.as_str()).width() as u16 + 2;
        let chunks =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).split(inner);
        chunks[1]
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        let badge_area = self.badge_area(area);
        block.render(area, buf);

        let name_area = Rect {
            width: inner.width.saturating_sub(badge_area.width),
            ..inner
        };

        Paragraph::new(Line::styled(
            self.model.page.store_name.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .render(name_area, buf);

        let badge_style = if self.model.cart_panel.visible {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Line::styled(
            format!(" {} ", self.model.cart_badge.label),
            badge_style,
        ))
        .render(badge_area, buf);
    }
}
