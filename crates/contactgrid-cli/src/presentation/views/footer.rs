use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::FooterViewModel;

/// Single line under the grid: record count, focused column, status.
pub struct FooterView<'a> {
    model: &'a FooterViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a FooterViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!("count {}", self.model.count),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if let Some(focus) = &self.model.focus {
            spans.push(Span::styled(
                format!("  resize: {} (</>)", focus),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        if let Some(status) = &self.model.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                status.label.as_str(),
                Style::default().fg(status_level_to_color(status.level)),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
