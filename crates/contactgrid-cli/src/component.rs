//! The contact grid component.
//!
//! Composes the layout controller, the one-shot loader and the column
//! renderer set around a [`GridStore`]. The store is the single source of
//! truth for `narrow` and the record list; every change it emits marks the
//! component dirty so the event loop redraws.
//!
//! Lifecycle: [`ContactGrid::mount`] registers the viewport watcher, the
//! first [`ContactGrid::draw`] starts the fetch, [`ContactGrid::pump`]
//! publishes the normalized batch, and [`ContactGrid::teardown`] (or drop)
//! cancels an in-flight fetch and releases the watcher.

use std::cell::{Cell, Ref};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use contactgrid_runtime::{
    ContactSource, DataLoader, DateConfig, GridChange, GridStore, LayoutController, LayoutMode,
    LoadOutcome, SharedStore, ViewportWatcher, config,
};
use contactgrid_types::Contact;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tokio::runtime::Handle;

use crate::presentation::{
    ColumnDescriptor, GridAdapter, GridState, build_screen_view_model, column_set,
    formatters::DateDisplay,
    views::{FooterView, TOOLBAR_HEIGHT, ToolbarView},
};

#[derive(Debug, Clone)]
pub struct GridSettings {
    pub min_wide_width: u16,
    pub date_width: u16,
    pub dates: DateDisplay,
}

impl GridSettings {
    pub fn from_config(config: &contactgrid_runtime::Config) -> anyhow::Result<Self> {
        Ok(Self {
            min_wide_width: config.layout.min_wide_width,
            date_width: config.columns.date_width,
            dates: DateDisplay::from_config(&config.date)?,
        })
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            min_wide_width: config::DEFAULT_MIN_WIDE_WIDTH,
            date_width: config::DEFAULT_DATE_WIDTH,
            dates: DateDisplay::from_config(&DateConfig::default()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    Continue,
    Quit,
}

pub struct ContactGrid {
    store: SharedStore,
    layout: LayoutController,
    loader: DataLoader,
    source: Arc<dyn ContactSource>,
    settings: GridSettings,
    state: GridState,
    dirty: Rc<Cell<bool>>,
}

impl ContactGrid {
    pub fn new(source: Arc<dyn ContactSource>, handle: Handle, settings: GridSettings) -> Self {
        let store = GridStore::shared();
        let dirty = Rc::new(Cell::new(true));

        let flag = Rc::clone(&dirty);
        store.borrow_mut().subscribe(move |change| {
            if let GridChange::Narrow(narrow) = change {
                tracing::debug!(mode = %LayoutMode::from_narrow(*narrow), "layout mode changed");
            }
            flag.set(true);
        });

        let layout = LayoutController::new(Rc::clone(&store), settings.min_wide_width);

        Self {
            store,
            layout,
            loader: DataLoader::new(handle),
            source,
            settings,
            state: GridState::new(),
            dirty,
        }
    }

    /// Register the viewport watcher. Repeated calls are no-ops.
    pub fn mount(&mut self, watcher: &dyn ViewportWatcher) {
        self.layout.initialize(watcher);
    }

    pub fn narrow(&self) -> bool {
        self.store.borrow().narrow()
    }

    pub fn set_narrow(&self, narrow: bool) {
        self.store.borrow_mut().set_narrow(narrow);
    }

    pub fn toggle_narrow(&self) {
        self.layout.toggle_narrow();
    }

    pub fn mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// Normalized records currently published.
    pub fn data(&self) -> Ref<'_, [Contact]> {
        Ref::map(self.store.borrow(), |store| store.contacts())
    }

    pub fn load_error(&self) -> Option<String> {
        self.store.borrow().load_error().map(str::to_string)
    }

    /// Column configuration for the current mode.
    pub fn columns(&self) -> [ColumnDescriptor; 4] {
        column_set(self.narrow(), self.settings.date_width)
    }

    pub fn grid_state(&self) -> &GridState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_pending()
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Paint toolbar, grid and count line into `buf`.
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        let [toolbar_area, grid_area, footer_area] = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let columns = self.columns();
        {
            let store = self.store.borrow();
            GridAdapter::new(store.contacts(), &columns, &self.settings.dates).render(
                grid_area,
                buf,
                &mut self.state,
            );

            let screen = build_screen_view_model(
                &store,
                self.loader.is_pending(),
                self.layout.query(),
                self.state.focus(),
            );
            ToolbarView::new(&screen.toolbar).render(toolbar_area, buf);
            FooterView::new(&screen.footer).render(footer_area, buf);
        }

        self.dirty.set(false);
        self.on_rendered();
    }

    /// Starts the fetch once the first frame is out.
    fn on_rendered(&mut self) {
        if self.loader.load_once(Arc::clone(&self.source)) {
            tracing::info!(source = %self.source.describe(), "loading contacts");
            self.dirty.set(true);
        }
    }

    /// Publish the fetch result if it has arrived. Returns `true` when the
    /// store changed.
    pub fn pump(&mut self) -> bool {
        match self.loader.poll() {
            Some(outcome) => {
                self.apply(outcome);
                true
            }
            None => false,
        }
    }

    /// Block until the fetch result arrives (or `timeout` elapses) and
    /// publish it.
    pub fn wait_for_data(&mut self, timeout: Duration) -> bool {
        match self.loader.wait(timeout) {
            Some(outcome) => {
                self.apply(outcome);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(contacts) => {
                tracing::info!(count = contacts.len(), "contacts published");
                self.store.borrow_mut().publish(contacts);
            }
            LoadOutcome::Failed(message) => {
                tracing::warn!(error = %message, "contact load failed; keeping current list");
                self.store.borrow_mut().record_load_failure(message);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> GridCommand {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return GridCommand::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return GridCommand::Quit;
            }
            KeyCode::Char('n') => self.toggle_narrow(),
            _ => {
                let len = self.data().len();
                let columns = self.columns();
                if self.state.handle_key(key, len, &columns) {
                    self.dirty.set(true);
                }
            }
        }
        GridCommand::Continue
    }

    /// Cancel an in-flight fetch and release the viewport subscription.
    pub fn teardown(&mut self) {
        self.loader.cancel();
        self.layout.teardown();
    }
}

impl Drop for ContactGrid {
    fn drop(&mut self) {
        self.teardown();
    }
}
