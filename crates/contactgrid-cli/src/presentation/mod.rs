//! Presentation layer for the contact grid.
//!
//! - `columns`: column descriptors and the pure cell/header renderers
//! - `grid`: adapter that drives the ratatui `Table` with the visible window
//! - `view_models` / `presenters`: display data for the toolbar and footer
//! - `views`: stateless widgets for that display data
//! - `renderers`: terminal loop and headless snapshot output

pub mod columns;
pub mod formatters;
pub mod grid;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use columns::{CellSlot, ColumnDescriptor, ColumnId, ColumnWidth, RowContext, column_set};
pub use grid::{GridAdapter, GridState, GridStats};
pub use presenters::build_screen_view_model;
pub use view_models::ScreenViewModel;
