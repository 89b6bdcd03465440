//! Display-ready data for the chrome around the grid.
//!
//! Presenters fill these; views only map them to widgets.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarViewModel {
    pub narrow: bool,
    pub toggle_hint: String,
    pub auto_hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterViewModel {
    pub count: usize,
    pub focus: Option<String>,
    pub status: Option<StatusBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenViewModel {
    pub toolbar: ToolbarViewModel,
    pub footer: FooterViewModel,
}
