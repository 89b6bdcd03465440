use std::fmt;
use std::rc::Rc;

use crate::store::SharedStore;
use crate::viewport::{Subscription, ViewportWatcher, WidthQuery};

/// The two layouts the grid can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub fn from_narrow(narrow: bool) -> Self {
        if narrow {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Wide => write!(f, "wide"),
            LayoutMode::Narrow => write!(f, "narrow"),
        }
    }
}

/// Owns the viewport subscription that drives the `narrow` flag.
///
/// The watcher callback sets `narrow = !matches`; [`toggle_narrow`] flips the
/// flag by hand. The two are not synchronized: the next crossing reported by
/// the watcher wins over an earlier manual toggle.
///
/// [`toggle_narrow`]: LayoutController::toggle_narrow
pub struct LayoutController {
    store: SharedStore,
    query: WidthQuery,
    subscription: Option<Subscription>,
}

impl LayoutController {
    pub fn new(store: SharedStore, min_wide_width: u16) -> Self {
        Self {
            store,
            query: WidthQuery::min_width(min_wide_width),
            subscription: None,
        }
    }

    pub fn query(&self) -> WidthQuery {
        self.query
    }

    pub fn is_watching(&self) -> bool {
        self.subscription.is_some()
    }

    /// Register with the watcher. Calling again while registered is a no-op.
    pub fn initialize(&mut self, watcher: &dyn ViewportWatcher) {
        if self.subscription.is_some() {
            return;
        }

        let store = Rc::clone(&self.store);
        let subscription = watcher.watch(
            self.query,
            Box::new(move |matches| {
                store.borrow_mut().set_narrow(!matches);
            }),
        );
        tracing::debug!(query = %self.query, "layout watcher registered");
        self.subscription = Some(subscription);
    }

    pub fn toggle_narrow(&self) {
        self.store.borrow_mut().toggle_narrow();
    }

    pub fn mode(&self) -> LayoutMode {
        LayoutMode::from_narrow(self.store.borrow().narrow())
    }

    /// Release the watcher subscription.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("layout watcher released");
        }
    }
}

impl Drop for LayoutController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for LayoutController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutController")
            .field("query", &self.query)
            .field("watching", &self.subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GridStore;
    use crate::viewport::ResizeWatcher;

    #[test]
    fn test_initial_mode_is_wide() {
        let controller = LayoutController::new(GridStore::shared(), 72);
        assert_eq!(controller.mode(), LayoutMode::Wide);
        assert!(!controller.is_watching());
    }

    #[test]
    fn test_watcher_drives_flag() {
        let store = GridStore::shared();
        let watcher = ResizeWatcher::new();
        let mut controller = LayoutController::new(store.clone(), 72);
        controller.initialize(&watcher);

        let mut seen = Vec::new();
        for width in [40, 120, 40] {
            watcher.notify_width(width);
            seen.push(store.borrow().narrow());
        }

        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let watcher = ResizeWatcher::with_width(100);
        let mut controller = LayoutController::new(GridStore::shared(), 72);
        controller.initialize(&watcher);
        controller.initialize(&watcher);
        assert_eq!(watcher.listener_count(), 1);
    }

    #[test]
    fn test_registration_applies_current_width() {
        let store = GridStore::shared();
        let watcher = ResizeWatcher::with_width(30);
        let mut controller = LayoutController::new(store.clone(), 72);
        controller.initialize(&watcher);
        assert_eq!(controller.mode(), LayoutMode::Narrow);
    }

    #[test]
    fn test_manual_toggle_overridden_by_next_crossing() {
        let store = GridStore::shared();
        let watcher = ResizeWatcher::with_width(100);
        let mut controller = LayoutController::new(store.clone(), 72);
        controller.initialize(&watcher);

        controller.toggle_narrow();
        assert_eq!(controller.mode(), LayoutMode::Narrow);

        // Same side of the threshold: no crossing, manual state stays.
        watcher.notify_width(110);
        assert_eq!(controller.mode(), LayoutMode::Narrow);

        watcher.notify_width(50);
        watcher.notify_width(90);
        assert_eq!(controller.mode(), LayoutMode::Wide);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let controller = LayoutController::new(GridStore::shared(), 72);
        controller.toggle_narrow();
        controller.toggle_narrow();
        assert_eq!(controller.mode(), LayoutMode::Wide);
    }

    #[test]
    fn test_teardown_releases_subscription() {
        let watcher = ResizeWatcher::with_width(100);
        let mut controller = LayoutController::new(GridStore::shared(), 72);
        controller.initialize(&watcher);
        controller.teardown();
        assert_eq!(watcher.listener_count(), 0);
        assert!(!controller.is_watching());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let watcher = ResizeWatcher::with_width(100);
        {
            let mut controller = LayoutController::new(GridStore::shared(), 72);
            controller.initialize(&watcher);
            assert_eq!(watcher.listener_count(), 1);
        }
        assert_eq!(watcher.listener_count(), 0);
    }
}
