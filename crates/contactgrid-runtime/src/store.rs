//! Explicit change-notifying store for the grid's two state axes: the layout
//! flag and the published contact list.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use contactgrid_types::Contact;

/// Shared handle used by the event loop and the layout controller.
pub type SharedStore = Rc<RefCell<GridStore>>;

/// What changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridChange {
    Narrow(bool),
    Data { count: usize },
    LoadFailed(String),
}

type Listener = Box<dyn FnMut(&GridChange)>;

#[derive(Default)]
pub struct GridStore {
    narrow: bool,
    contacts: Vec<Contact>,
    load_error: Option<String>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn narrow(&self) -> bool {
        self.narrow
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Incremented on every notified change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a change listener. Listeners receive the change only and
    /// must not borrow the store.
    pub fn subscribe(&mut self, listener: impl FnMut(&GridChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_narrow(&mut self, narrow: bool) {
        if self.narrow == narrow {
            return;
        }
        self.narrow = narrow;
        self.emit(GridChange::Narrow(narrow));
    }

    pub fn toggle_narrow(&mut self) {
        let next = !self.narrow;
        self.set_narrow(next);
    }

    /// Replace the whole contact list in one step.
    pub fn publish(&mut self, contacts: Vec<Contact>) {
        let count = contacts.len();
        self.contacts = contacts;
        self.load_error = None;
        self.emit(GridChange::Data { count });
    }

    /// Keep the current list and remember why loading failed.
    pub fn record_load_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.load_error = Some(message.clone());
        self.emit(GridChange::LoadFailed(message));
    }

    fn emit(&mut self, change: GridChange) {
        self.revision += 1;
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl fmt::Debug for GridStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridStore")
            .field("narrow", &self.narrow)
            .field("contacts", &self.contacts.len())
            .field("load_error", &self.load_error)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
