//! Pure functions from grid state to view models.

use contactgrid_runtime::{GridStore, WidthQuery};

use super::columns::ColumnId;
use super::view_models::{FooterViewModel, ScreenViewModel, StatusBadge, ToolbarViewModel};

pub fn build_screen_view_model(
    store: &GridStore,
    loading: bool,
    query: WidthQuery,
    focus: Option<ColumnId>,
) -> ScreenViewModel {
    ScreenViewModel {
        toolbar: build_toolbar(store.narrow(), query),
        footer: build_footer(store, loading, focus),
    }
}

fn build_toolbar(narrow: bool, query: WidthQuery) -> ToolbarViewModel {
    ToolbarViewModel {
        narrow,
        toggle_hint: "[n] toggle narrow".to_string(),
        auto_hint: format!(
            "Layout switches automatically: wide when {}, narrow below.",
            query
        ),
    }
}

fn build_footer(store: &GridStore, loading: bool, focus: Option<ColumnId>) -> FooterViewModel {
    let status = if loading {
        Some(StatusBadge::info("loading contacts..."))
    } else {
        store
            .load_error()
            .map(|message| StatusBadge::error(format!("load failed: {}", message)))
    };

    FooterViewModel {
        count: store.contacts().len(),
        focus: focus.map(|id| id.to_string()),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_empty_store() {
        let store = GridStore::new();
        let vm = build_screen_view_model(&store, false, WidthQuery::min_width(72), None);

        assert!(!vm.toolbar.narrow);
        assert!(vm.toolbar.auto_hint.contains("(min-width: 72)"));
        assert_eq!(vm.footer.count, 0);
        assert_eq!(vm.footer.status, None);
    }

    #[test]
    fn test_loading_status() {
        let mut store = GridStore::new();
        store.set_narrow(true);
        let vm = build_screen_view_model(&store, true, WidthQuery::min_width(72), None);

        assert!(vm.toolbar.narrow);
        assert_eq!(vm.footer.status.unwrap().level, StatusLevel::Info);
    }

    #[test]
    fn test_failure_status_and_focus() {
        let mut store = GridStore::new();
        store.record_load_failure("boom".to_string());
        let vm = build_screen_view_model(
            &store,
            false,
            WidthQuery::min_width(72),
            Some(ColumnId::Subject),
        );

        let status = vm.footer.status.unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert_eq!(status.label, "load failed: boom");
        assert_eq!(vm.footer.focus.as_deref(), Some("subject"));
    }
}
