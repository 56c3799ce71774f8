use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::MUTED;

/// Key hints on the first row, copyright on the second.
pub struct FooterView<'a> {
    text: &'a str,
    cart_visible: bool,
}

impl<'a> FooterView<'a> {
    pub fn new(text: &'a str, cart_visible: bool) -> Self {
        Self { text, cart_visible }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.cart_visible {
            &[
                ("↑↓", "move"),
                ("+/-", "quantity"),
                ("d", "remove"),
                ("Enter", "checkout"),
                ("c/Esc", "close"),
                ("q", "quit"),
            ]
        } else {
            &[
                ("←→", "category"),
                ("↑↓", "move"),
                ("Enter", "add"),
                ("c", "cart"),
                ("q", "quit"),
            ]
        }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(MUTED));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(MUTED)));
            }
            spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::raw(format!(" {}", label)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        Paragraph::new(Line::styled(self.text, Style::default().fg(MUTED)))
            .centered()
            .render(chunks[1], buf);
    }
}
