//! Headless rendering into a ratatui `TestBackend`.

use anyhow::Result;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::component::ContactGrid;

/// Draw one frame of `grid` at the given size and return it as text.
pub fn render_frame(grid: &mut ContactGrid, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        let area = frame.area();
        grid.draw(area, frame.buffer_mut());
    })?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// One line per buffer row, trailing blanks trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    if width == 0 {
        return String::new();
    }

    buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
