//! Interactive terminal loop.
//!
//! Terminal resize events feed the [`ResizeWatcher`]; everything else is
//! routed to the component. A frame is drawn only when the component is
//! dirty.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use contactgrid_runtime::ResizeWatcher;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::component::{ContactGrid, GridCommand};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

pub struct TuiRenderer {
    watcher: ResizeWatcher,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            watcher: ResizeWatcher::new(),
        }
    }

    pub fn watcher(&self) -> &ResizeWatcher {
        &self.watcher
    }

    pub fn run(&self, grid: &mut ContactGrid) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            restore_terminal();
            std::process::exit(0);
        })?;

        let size = terminal.size()?;
        self.watcher.notify_width(size.width);
        grid.mount(&self.watcher);

        let result = self.event_loop(&mut terminal, grid);
        grid.teardown();
        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        grid: &mut ContactGrid,
    ) -> Result<()> {
        loop {
            if grid.needs_redraw() {
                terminal.draw(|frame| {
                    let area = frame.area();
                    grid.draw(area, frame.buffer_mut());
                })?;
            }

            grid.pump();

            if !event::poll(TICK_RATE)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if grid.handle_key(key) == GridCommand::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(width, _) => {
                    self.watcher.notify_width(width);
                    grid.invalidate();
                }
                _ => {}
            }
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
