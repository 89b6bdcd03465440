//! Stateless widgets for the chrome around the grid.
//!
//! Views take a reference to a view model and only map it to ratatui
//! widgets. Color mapping from [`StatusLevel`] happens here.

pub mod footer;
pub mod toolbar;

pub use footer::FooterView;
pub use toolbar::{TOOLBAR_HEIGHT, ToolbarView};

use ratatui::style::Color;

use super::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
