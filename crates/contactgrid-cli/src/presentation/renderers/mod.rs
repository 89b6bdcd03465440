pub mod snapshot;
pub mod tui;

pub use snapshot::{buffer_to_string, render_frame};
pub use tui::TuiRenderer;
