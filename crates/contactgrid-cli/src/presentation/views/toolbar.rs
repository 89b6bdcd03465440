use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ToolbarViewModel;

/// Two content lines inside a bordered block.
pub const TOOLBAR_HEIGHT: u16 = 4;

pub struct ToolbarView<'a> {
    model: &'a ToolbarViewModel,
}

impl<'a> ToolbarView<'a> {
    pub fn new(model: &'a ToolbarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ToolbarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("ContactGrid")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let flag_style = if self.model.narrow {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    self.model.toggle_hint.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("narrow={}", self.model.narrow), flag_style),
            ]),
            Line::from(Span::styled(
                self.model.auto_hint.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
