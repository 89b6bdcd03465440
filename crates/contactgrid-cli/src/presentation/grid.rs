//! Grid adapter over the ratatui `Table`.
//!
//! The table owns drawing, highlighting and clipping. The adapter decides
//! which rows are on screen and hands the table only that window, so column
//! renderers run once per visible row and never for rows off screen.

use std::collections::HashMap;

use contactgrid_types::Contact;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Row, StatefulWidget, Table, TableState},
};

use super::columns::{CellSlot, ColumnDescriptor, ColumnId, ColumnWidth, RowContext};
use super::formatters::DateDisplay;

pub const COLUMN_SPACING: u16 = 1;
pub const MIN_COLUMN_WIDTH: u16 = 4;

/// Selection, scroll and user column sizes. Survives mode switches.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    selected: Option<usize>,
    offset: usize,
    page: usize,
    focus: Option<ColumnId>,
    widths: HashMap<ColumnId, u16>,
    last_widths: HashMap<ColumnId, u16>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn focus(&self) -> Option<ColumnId> {
        self.focus
    }

    /// User-chosen width of a resizable column, if any.
    pub fn width_override(&self, id: ColumnId) -> Option<u16> {
        self.widths.get(&id).copied()
    }

    /// Width the column had in the last rendered frame.
    pub fn rendered_width(&self, id: ColumnId) -> Option<u16> {
        self.last_widths.get(&id).copied()
    }

    /// Handle a navigation key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, len: usize, columns: &[ColumnDescriptor]) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::PageDown => self.page_down(len),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.select_first(len),
            KeyCode::End => self.select_last(len),
            KeyCode::Char(']') => self.focus_next(columns),
            KeyCode::Char('[') => self.focus_previous(columns),
            KeyCode::Char('>') => self.resize_focused(columns, 1),
            KeyCode::Char('<') => self.resize_focused(columns, -1),
            _ => return false,
        }
        true
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.selected = Some(next);
    }

    pub fn select_previous(&mut self) {
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn page_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let step = self.page.max(1);
        self.selected = Some(self.selected.map_or(0, |i| (i + step).min(len - 1)));
    }

    pub fn page_up(&mut self) {
        let step = self.page.max(1);
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(step)));
    }

    pub fn select_first(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    fn resizable(columns: &[ColumnDescriptor]) -> Vec<ColumnId> {
        columns
            .iter()
            .filter(|c| c.is_visible() && c.resizable)
            .map(|c| c.id)
            .collect()
    }

    pub fn focus_next(&mut self, columns: &[ColumnDescriptor]) {
        let ids = Self::resizable(columns);
        self.focus = match self.focus.and_then(|f| ids.iter().position(|id| *id == f)) {
            Some(i) => ids.get((i + 1) % ids.len()).copied(),
            None => ids.first().copied(),
        };
    }

    pub fn focus_previous(&mut self, columns: &[ColumnDescriptor]) {
        let ids = Self::resizable(columns);
        self.focus = match self.focus.and_then(|f| ids.iter().position(|id| *id == f)) {
            Some(i) => ids.get((i + ids.len() - 1) % ids.len()).copied(),
            None => ids.last().copied(),
        };
    }

    /// Grow or shrink the focused column. Only resizable visible columns move.
    pub fn resize_focused(&mut self, columns: &[ColumnDescriptor], delta: i32) {
        let Some(focus) = self.focus else {
            return;
        };
        if !Self::resizable(columns).contains(&focus) {
            return;
        }

        let current = self
            .widths
            .get(&focus)
            .or_else(|| self.last_widths.get(&focus))
            .copied()
            .unwrap_or(MIN_COLUMN_WIDTH);
        let next = (current as i32 + delta).clamp(MIN_COLUMN_WIDTH as i32, u16::MAX as i32);
        self.widths.insert(focus, next as u16);
    }

    /// Keep selection inside the list and the selected row inside the window.
    fn clamp(&mut self, len: usize, page: usize) {
        self.page = page;
        if len == 0 {
            self.selected = None;
            self.offset = 0;
            return;
        }

        if let Some(selected) = self.selected
            && selected >= len
        {
            self.selected = Some(len - 1);
        }

        let max_offset = len.saturating_sub(page);
        self.offset = self.offset.min(max_offset);
        if let Some(selected) = self.selected {
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + page {
                self.offset = selected + 1 - page;
            }
        }
    }
}

/// What one frame of the grid did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStats {
    pub visible_rows: usize,
    pub visible_columns: usize,
    pub header: bool,
    pub cell_renders: usize,
    pub header_renders: usize,
}

pub struct GridAdapter<'a> {
    items: &'a [Contact],
    columns: &'a [ColumnDescriptor],
    dates: &'a DateDisplay,
}

impl<'a> GridAdapter<'a> {
    pub fn new(
        items: &'a [Contact],
        columns: &'a [ColumnDescriptor],
        dates: &'a DateDisplay,
    ) -> Self {
        Self {
            items,
            columns,
            dates,
        }
    }

    pub fn visible_columns(&self) -> Vec<&'a ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_visible()).collect()
    }

    pub fn has_header(&self) -> bool {
        self.columns
            .iter()
            .any(|c| c.is_visible() && c.header_renderer.is_some())
    }

    pub fn row_height(&self) -> u16 {
        self.visible_columns()
            .iter()
            .map(|c| c.row_lines)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Rows that fit in `height` terminal lines.
    pub fn page_size(&self, height: u16) -> usize {
        let body = height.saturating_sub(u16::from(self.has_header()));
        (body / self.row_height()).max(1) as usize
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &mut GridState) -> GridStats {
        let columns = self.visible_columns();
        let header = self.has_header();
        let row_height = self.row_height();
        let page = self.page_size(area.height);

        state.clamp(self.items.len(), page);
        let end = (state.offset + page).min(self.items.len());
        let window = &self.items[state.offset..end];

        let mut stats = GridStats {
            visible_rows: window.len(),
            visible_columns: columns.len(),
            header,
            ..GridStats::default()
        };

        let mut widths = vec![0u16; columns.len()];
        let mut header_slots: Vec<Option<CellSlot>> = vec![None; columns.len()];
        let mut cell_slots: Vec<Vec<CellSlot>> = vec![Vec::new(); columns.len()];

        // Sized columns first; whatever remains goes to fill columns.
        for (i, column) in columns.iter().enumerate() {
            if column.width == ColumnWidth::Fill {
                continue;
            }
            let hint = match column.width {
                ColumnWidth::Fixed(w) => state.width_override(column.id).unwrap_or(w),
                _ => state.width_override(column.id).unwrap_or(0),
            };

            let head = self.render_header(column, hint, &mut stats);
            let cells = self.render_cells(column, hint, state.offset, window, &mut stats);

            widths[i] = if hint > 0 {
                hint
            } else {
                let content = cells
                    .iter()
                    .chain(head.iter())
                    .map(CellSlot::content_width)
                    .max()
                    .unwrap_or(0);
                content.max(MIN_COLUMN_WIDTH)
            };
            header_slots[i] = head;
            cell_slots[i] = cells;
        }

        let fills = columns
            .iter()
            .filter(|c| c.width == ColumnWidth::Fill)
            .count() as u16;
        if fills > 0 {
            let spacing = COLUMN_SPACING * (columns.len() as u16).saturating_sub(1);
            let used: u16 = widths.iter().sum();
            let remaining = area.width.saturating_sub(used + spacing);
            let share = remaining / fills;

            for (i, column) in columns.iter().enumerate() {
                if column.width != ColumnWidth::Fill {
                    continue;
                }
                widths[i] = share;
                header_slots[i] = self.render_header(column, share, &mut stats);
                cell_slots[i] = self.render_cells(column, share, state.offset, window, &mut stats);
            }
        }

        state.last_widths = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| (c.id, *w))
            .collect();

        let mut per_column: Vec<_> = cell_slots.into_iter().map(Vec::into_iter).collect();
        let rows: Vec<Row<'static>> = (0..window.len())
            .map(|_| {
                let cells = per_column
                    .iter_mut()
                    .map(|slots| slots.next().unwrap_or_default().into_cell());
                Row::new(cells.collect::<Vec<_>>()).height(row_height)
            })
            .collect();

        let mut table = Table::new(rows, widths.iter().map(|w| Constraint::Length(*w)))
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        if header {
            let cells: Vec<_> = header_slots
                .into_iter()
                .map(|slot| slot.unwrap_or_default().into_cell())
                .collect();
            table = table.header(Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD)));
        }

        let mut table_state =
            TableState::default().with_selected(state.selected.map(|s| s - state.offset));
        StatefulWidget::render(table, area, buf, &mut table_state);

        stats
    }

    fn render_header(
        &self,
        column: &ColumnDescriptor,
        width: u16,
        stats: &mut GridStats,
    ) -> Option<CellSlot> {
        column.header_renderer.map(|render| {
            let mut slot = CellSlot::new(width);
            render(&mut slot, column);
            stats.header_renders += 1;
            slot
        })
    }

    fn render_cells(
        &self,
        column: &ColumnDescriptor,
        width: u16,
        offset: usize,
        window: &[Contact],
        stats: &mut GridStats,
    ) -> Vec<CellSlot> {
        window
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut slot = CellSlot::new(width);
                let row = RowContext {
                    item,
                    index: offset + i,
                    dates: self.dates,
                };
                (column.renderer)(&mut slot, column, &row);
                stats.cell_renders += 1;
                slot
            })
            .collect()
    }
}
