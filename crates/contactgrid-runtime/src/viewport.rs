//! Viewport width watching.
//!
//! A [`ViewportWatcher`] evaluates a [`WidthQuery`] against the current
//! viewport width and calls back with `matches` once on registration and
//! then on every threshold crossing. Registrations are scoped: the returned
//! [`Subscription`] unregisters when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

static MIN_WIDTH_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*min-width\s*:\s*(\d+)\s*(?:px|cells)?\s*\)?$").expect("valid regex")
});

/// Width predicate: "viewport width is at least `N` cells".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthQuery {
    min_width: u16,
}

impl WidthQuery {
    pub fn min_width(min_width: u16) -> Self {
        Self { min_width }
    }

    pub fn threshold(&self) -> u16 {
        self.min_width
    }

    pub fn matches(&self, width: u16) -> bool {
        width >= self.min_width
    }
}

impl fmt::Display for WidthQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(min-width: {})", self.min_width)
    }
}

impl FromStr for WidthQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = MIN_WIDTH_QUERY
            .captures(s.trim())
            .ok_or_else(|| Error::InvalidQuery(s.to_string()))?;
        let min_width = caps[1]
            .parse::<u16>()
            .map_err(|_| Error::InvalidQuery(s.to_string()))?;
        Ok(Self { min_width })
    }
}

/// Scoped registration guard. Releases its registration exactly once, either
/// on [`Subscription::unsubscribe`] or on drop.
#[must_use = "dropping a Subscription unregisters it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

pub type WidthCallback = Box<dyn FnMut(bool)>;

/// Source of viewport-width crossing events.
pub trait ViewportWatcher {
    fn watch(&self, query: WidthQuery, callback: WidthCallback) -> Subscription;
}

struct Listener {
    id: u64,
    query: WidthQuery,
    last: Option<bool>,
    callback: WidthCallback,
}

#[derive(Default)]
struct WatcherInner {
    width: Option<u16>,
    next_id: u64,
    listeners: Vec<Listener>,
}

/// In-process watcher fed with terminal resize events.
///
/// Callbacks run synchronously inside [`ResizeWatcher::notify_width`] and
/// must not register or drop subscriptions on the same watcher.
#[derive(Clone, Default)]
pub struct ResizeWatcher {
    inner: Rc<RefCell<WatcherInner>>,
}

impl ResizeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: u16) -> Self {
        let watcher = Self::new();
        watcher.inner.borrow_mut().width = Some(width);
        watcher
    }

    pub fn width(&self) -> Option<u16> {
        self.inner.borrow().width
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Record a new viewport width and fire every listener whose predicate
    /// changed.
    pub fn notify_width(&self, width: u16) {
        let mut inner = self.inner.borrow_mut();
        inner.width = Some(width);
        for listener in inner.listeners.iter_mut() {
            let matches = listener.query.matches(width);
            if listener.last != Some(matches) {
                listener.last = Some(matches);
                tracing::debug!(query = %listener.query, width, matches, "viewport crossing");
                (listener.callback)(matches);
            }
        }
    }
}

impl ViewportWatcher for ResizeWatcher {
    fn watch(&self, query: WidthQuery, mut callback: WidthCallback) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;

            let last = inner.width.map(|width| query.matches(width));
            if let Some(matches) = last {
                callback(matches);
            }

            inner.listeners.push(Listener {
                id,
                query,
                last,
                callback,
            });
            id
        };

        let weak: Weak<RefCell<WatcherInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}

impl fmt::Debug for ResizeWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeWatcher")
            .field("width", &inner.width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
