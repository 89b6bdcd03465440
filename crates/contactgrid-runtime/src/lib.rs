//! Runtime state for the contact grid.
//!
//! Everything here is UI-toolkit agnostic: the store, the layout controller
//! and the viewport watcher live on the event-loop thread, while the data
//! loader runs its single fetch on a tokio runtime and hands the normalized
//! batch back over a channel.

pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod source;
pub mod store;
pub mod viewport;

pub use config::{ColumnsConfig, Config, DataConfig, DateConfig, DateZone, LayoutConfig};
pub use error::{Error, Result};
pub use layout::{LayoutController, LayoutMode};
pub use loader::{DataLoader, LoadOutcome};
pub use source::{BundledSource, ContactSource, JsonFileSource, StaticSource};
pub use store::{GridChange, GridStore, SharedStore};
pub use viewport::{ResizeWatcher, Subscription, ViewportWatcher, WidthQuery};
