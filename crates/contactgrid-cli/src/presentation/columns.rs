//! Column renderer set.
//!
//! Each column is described by a [`ColumnDescriptor`] holding plain function
//! pointers: a cell renderer `(slot, column, row)` and an optional header
//! renderer `(slot, column)`. The grid adapter calls them; they paint into a
//! [`CellSlot`] and never see the terminal.

use std::fmt;

use contactgrid_types::Contact;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Cell,
};

use super::formatters::{
    DateDisplay, avatar_color, display_width, initials, pad_to_width, truncate_text,
};

/// Avatar block: one space, two initials, one space.
pub const AVATAR_WIDTH: usize = 4;

const DATE_COLOR: Color = Color::Rgb(0x73, 0x73, 0x73);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Name,
    Subject,
    Date,
    Narrow,
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Name => write!(f, "name"),
            ColumnId::Subject => write!(f, "subject"),
            ColumnId::Date => write!(f, "date"),
            ColumnId::Narrow => write!(f, "narrow"),
        }
    }
}

/// How a column's width is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Sized to the widest header/visible cell
    Auto,
    Fixed(u16),
    /// Takes whatever the other columns leave
    Fill,
}

/// Output target of a renderer: the lines of one cell.
#[derive(Debug, Clone, Default)]
pub struct CellSlot {
    width: u16,
    alignment: Alignment,
    lines: Vec<Line<'static>>,
}

impl CellSlot {
    /// `width == 0` means the slot is sized to its content.
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn align(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn content_width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    /// Text content without styling, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_cell(self) -> Cell<'static> {
        Cell::from(Text::from(self.lines).alignment(self.alignment))
    }
}

/// Per-row input of a cell renderer.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub item: &'a Contact,
    pub index: usize,
    pub dates: &'a DateDisplay,
}

pub type CellRenderer = fn(&mut CellSlot, &ColumnDescriptor, &RowContext<'_>);
pub type HeaderRenderer = fn(&mut CellSlot, &ColumnDescriptor);

#[derive(Clone, Copy)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub resizable: bool,
    pub auto_width: bool,
    pub hidden: bool,
    pub width: ColumnWidth,
    /// Terminal lines each row of this column needs
    pub row_lines: u16,
    pub header_renderer: Option<HeaderRenderer>,
    pub renderer: CellRenderer,
}

impl ColumnDescriptor {
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("resizable", &self.resizable)
            .field("auto_width", &self.auto_width)
            .field("hidden", &self.hidden)
            .field("width", &self.width)
            .field("row_lines", &self.row_lines)
            .field("has_header", &self.header_renderer.is_some())
            .finish()
    }
}

/// The four columns, with visibility and headers chosen by layout.
///
/// Wide: name, subject and date are visible with headers. Narrow: only the
/// combined column is visible and no column has a header.
pub fn column_set(narrow: bool, date_width: u16) -> [ColumnDescriptor; 4] {
    let header = |renderer: HeaderRenderer| if narrow { None } else { Some(renderer) };

    [
        ColumnDescriptor {
            id: ColumnId::Name,
            resizable: true,
            auto_width: true,
            hidden: narrow,
            width: ColumnWidth::Auto,
            row_lines: 1,
            header_renderer: header(name_header),
            renderer: name_cell,
        },
        ColumnDescriptor {
            id: ColumnId::Subject,
            resizable: true,
            auto_width: true,
            hidden: narrow,
            width: ColumnWidth::Auto,
            row_lines: 1,
            header_renderer: header(subject_header),
            renderer: subject_cell,
        },
        ColumnDescriptor {
            id: ColumnId::Date,
            resizable: false,
            auto_width: false,
            hidden: narrow,
            width: ColumnWidth::Fixed(date_width),
            row_lines: 1,
            header_renderer: header(date_header),
            renderer: date_cell,
        },
        ColumnDescriptor {
            id: ColumnId::Narrow,
            resizable: false,
            auto_width: false,
            hidden: !narrow,
            width: ColumnWidth::Fill,
            row_lines: 2,
            header_renderer: None,
            renderer: narrow_cell,
        },
    ]
}

fn basic(slot: &mut CellSlot, value: &str) {
    slot.push(Line::raw(value.to_string()));
}

pub fn name_header(slot: &mut CellSlot, _column: &ColumnDescriptor) {
    basic(slot, "Name");
}

pub fn name_cell(slot: &mut CellSlot, _column: &ColumnDescriptor, row: &RowContext<'_>) {
    basic(slot, &row.item.name);
}

pub fn subject_header(slot: &mut CellSlot, _column: &ColumnDescriptor) {
    basic(slot, "Subject");
}

pub fn subject_cell(slot: &mut CellSlot, _column: &ColumnDescriptor, row: &RowContext<'_>) {
    basic(slot, &row.item.subject);
}

pub fn date_header(slot: &mut CellSlot, _column: &ColumnDescriptor) {
    slot.align(Alignment::Right);
    basic(slot, "Date");
}

fn date_span(row: &RowContext<'_>) -> Span<'static> {
    Span::styled(
        row.dates.render(row.item.iso.as_deref()),
        Style::default().fg(DATE_COLOR),
    )
}

pub fn date_cell(slot: &mut CellSlot, _column: &ColumnDescriptor, row: &RowContext<'_>) {
    slot.align(Alignment::Right);
    slot.push(Line::from(date_span(row)));
}

/// Card layout: avatar, name over subject, date pushed to the right edge.
pub fn narrow_cell(slot: &mut CellSlot, _column: &ColumnDescriptor, row: &RowContext<'_>) {
    let item = row.item;
    let avatar_style = Style::default()
        .bg(avatar_color(&item.color))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let width = slot.width() as usize;
    let lead = AVATAR_WIDTH + 1;
    let date = date_span(row);
    let date_width = date.width();

    let name_room = width.saturating_sub(lead + date_width + 1);
    let name = truncate_text(&item.name, name_room);
    let gap = width.saturating_sub(lead + display_width(&name) + date_width);

    slot.push(Line::from(vec![
        Span::styled(
            format!(" {} ", pad_to_width(&initials(&item.name), AVATAR_WIDTH - 2)),
            avatar_style,
        ),
        Span::raw(" "),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        date,
    ]));
    slot.push(Line::from(vec![
        Span::styled(" ".repeat(AVATAR_WIDTH), avatar_style),
        Span::raw(" "),
        Span::styled(
            truncate_text(&item.subject, width.saturating_sub(lead)),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactgrid_runtime::DateZone;
    use contactgrid_types::{RawContact, normalize};

    fn contact() -> Contact {
        normalize(&RawContact {
            name: "A".to_string(),
            short_text: "s1".to_string(),
            date: "2020-01-01".to_string(),
            image: "i".to_string(),
            color: "red".to_string(),
        })
    }

    fn dates() -> DateDisplay {
        DateDisplay::new("%a, %b %-d, %Y", DateZone::Utc).unwrap()
    }

    fn visible(columns: &[ColumnDescriptor]) -> Vec<ColumnId> {
        columns
            .iter()
            .filter(|c| c.is_visible())
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn test_wide_set_has_three_headed_columns() {
        let columns = column_set(false, 18);
        assert_eq!(
            visible(&columns),
            vec![ColumnId::Name, ColumnId::Subject, ColumnId::Date]
        );
        assert!(
            columns
                .iter()
                .filter(|c| c.is_visible())
                .all(|c| c.header_renderer.is_some())
        );
    }

    #[test]
    fn test_narrow_set_has_one_headless_column() {
        let columns = column_set(true, 18);
        assert_eq!(visible(&columns), vec![ColumnId::Narrow]);
        assert!(columns.iter().all(|c| c.header_renderer.is_none()));
    }

    #[test]
    fn test_modes_are_exclusive() {
        for narrow in [false, true] {
            let columns = column_set(narrow, 18);
            let wide_active = columns
                .iter()
                .filter(|c| c.id != ColumnId::Narrow)
                .all(|c| c.is_visible());
            let narrow_active = columns
                .iter()
                .find(|c| c.id == ColumnId::Narrow)
                .is_some_and(|c| c.is_visible());
            assert!(wide_active ^ narrow_active);
        }
    }

    #[test]
    fn test_width_policy() {
        let columns = column_set(false, 20);
        assert!(columns[0].resizable && columns[0].auto_width);
        assert!(columns[1].resizable && columns[1].auto_width);
        assert_eq!(columns[2].width, ColumnWidth::Fixed(20));
        assert!(!columns[2].resizable);
        assert_eq!(columns[3].width, ColumnWidth::Fill);
    }

    #[test]
    fn test_plain_cells() {
        let item = contact();
        let dates = dates();
        let row = RowContext {
            item: &item,
            index: 0,
            dates: &dates,
        };
        let columns = column_set(false, 18);

        let mut slot = CellSlot::new(0);
        (columns[0].renderer)(&mut slot, &columns[0], &row);
        assert_eq!(slot.plain_text(), "A");

        let mut slot = CellSlot::new(0);
        (columns[1].renderer)(&mut slot, &columns[1], &row);
        assert_eq!(slot.plain_text(), "s1");

        let mut slot = CellSlot::new(18);
        (columns[2].renderer)(&mut slot, &columns[2], &row);
        assert_eq!(slot.plain_text(), "Wed, Jan 1, 2020");
        assert_eq!(slot.alignment(), Alignment::Right);
    }

    #[test]
    fn test_headers() {
        let columns = column_set(false, 18);
        let labels: Vec<String> = columns
            .iter()
            .filter_map(|c| c.header_renderer.map(|render| (c, render)))
            .map(|(c, render)| {
                let mut slot = CellSlot::new(0);
                render(&mut slot, c);
                slot.plain_text()
            })
            .collect();
        assert_eq!(labels, vec!["Name", "Subject", "Date"]);
    }

    #[test]
    fn test_narrow_card_layout() {
        let item = contact();
        let dates = dates();
        let row = RowContext {
            item: &item,
            index: 0,
            dates: &dates,
        };
        let columns = column_set(true, 18);

        let mut slot = CellSlot::new(40);
        (columns[3].renderer)(&mut slot, &columns[3], &row);

        let text = slot.plain_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" A   A"));
        assert!(lines[0].ends_with("Wed, Jan 1, 2020"));
        assert_eq!(lines[0].chars().count(), 40);
        assert_eq!(lines[1], "      s1");

        let avatar = &slot.lines()[0].spans[0];
        assert_eq!(avatar.style.bg, Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_narrow_card_wide_chars_keep_date_visible() {
        let mut item = contact();
        item.name = "山田太郎".repeat(4);
        let dates = dates();
        let row = RowContext {
            item: &item,
            index: 0,
            dates: &dates,
        };
        let columns = column_set(true, 18);

        let mut slot = CellSlot::new(40);
        (columns[3].renderer)(&mut slot, &columns[3], &row);

        let first = &slot.lines()[0];
        assert_eq!(first.width(), 40);
        assert_eq!(first.spans[0].content, " 山 ");
        assert_eq!(first.spans[2].content, "山田太郎山田太...");
        assert!(slot.plain_text().lines().next().unwrap().ends_with("Wed, Jan 1, 2020"));
    }

    #[test]
    fn test_narrow_card_unknown_date() {
        let mut item = contact();
        item.iso = None;
        let dates = dates();
        let row = RowContext {
            item: &item,
            index: 0,
            dates: &dates,
        };
        let columns = column_set(true, 18);

        let mut slot = CellSlot::new(30);
        (columns[3].renderer)(&mut slot, &columns[3], &row);
        assert!(slot.plain_text().lines().next().unwrap().ends_with(" -"));
    }
}
