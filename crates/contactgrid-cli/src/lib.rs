//! Responsive contact grid for the terminal.
//!
//! A wide, three-column table (name, subject, date) when the terminal is at
//! least `layout.min_wide_width` cells wide, and single-column cards below
//! that. Contacts are fetched once, after the first frame, and normalized as
//! a batch before they reach the grid.

mod args;
mod commands;
pub mod component;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
pub use component::{ContactGrid, GridCommand, GridSettings};
