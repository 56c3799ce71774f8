//! Filter Bar View
//!
//! Hero text above a strip of category buttons. Each button is drawn as
//! ` label ` with one blank column between buttons; `button_areas` reports
//! the same geometry for click hit testing.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::StorefrontViewModel;

use super::{ACCENT, MUTED};

const DIVIDER: &str = " ";

pub struct FilterBarView<'a> {
    model: &'a StorefrontViewModel,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a StorefrontViewModel) -> Self {
        Self { model }
    }

    fn rows(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1), // hero title
            Constraint::Length(1), // hero subtitle
            Constraint::Length(1), // spacer
            Constraint::Length(1), // buttons
        ])
        .areas(area)
    }

    fn button_text(label: &str) -> String {
        format!(" {} ", label)
    }

    /// Screen area of every category button, paired with its label. Buttons
    /// past the right edge are clipped or left out.
    pub fn button_areas(&self, area: Rect) -> Vec<(Rect, String)> {
        let [_, _, _, row] = Self::rows(area);
        let right = row.x + row.width;
        let divider = Span::raw(DIVIDER).width() as u16;

        let mut x = row.x;
        let mut areas = Vec::new();
        for button in &self.model.filter_bar {
            if x >= right {
                break;
            }
            let width = Span::raw(Self::button_text(&button.label)).width() as u16;
            areas.push((
                Rect {
                    x,
                    y: row.y,
                    width: width.min(right - x),
                    height: row.height,
                },
                button.label.clone(),
            ));
            x = x.saturating_add(width + divider);
        }
        areas
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, subtitle, _, row] = Self::rows(area);

        Paragraph::new(Line::styled(
            self.model.page.hero_title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(title, buf);

        Paragraph::new(Line::styled(
            self.model.page.hero_subtitle.as_str(),
            Style::default().fg(MUTED),
        ))
        .centered()
        .render(subtitle, buf);

        // An unknown category highlights nothing
        let active = Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for (i, button) in self.model.filter_bar.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(DIVIDER));
            }
            let style = if button.active {
                active
            } else {
                Style::default().fg(MUTED)
            };
            spans.push(Span::styled(Self::button_text(&button.label), style));
        }
        Paragraph::new(Line::from(spans)).render(row, buf);
    }
}
