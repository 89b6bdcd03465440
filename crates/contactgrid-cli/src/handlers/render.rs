use std::time::Duration;

use anyhow::Result;
use contactgrid_runtime::ResizeWatcher;
use tokio::runtime::Runtime;

use crate::component::ContactGrid;
use crate::context::AppContext;
use crate::presentation::renderers::render_frame;
use crate::types::LayoutArg;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

/// Mount at `width`, let the fetch complete, print the resulting frame.
pub fn handle(
    ctx: &AppContext,
    width: Option<u16>,
    height: Option<u16>,
    mode: LayoutArg,
    timeout: Duration,
) -> Result<()> {
    let (width, height) = frame_size(width, height);
    let runtime = Runtime::new()?;
    let mut grid = ContactGrid::new(ctx.source()?, runtime.handle().clone(), ctx.grid_settings()?);

    let watcher = ResizeWatcher::with_width(width);
    grid.mount(&watcher);
    match mode {
        LayoutArg::Auto => {}
        LayoutArg::Wide => grid.set_narrow(false),
        LayoutArg::Narrow => grid.set_narrow(true),
    }

    // The first frame is what starts the fetch.
    render_frame(&mut grid, width, height)?;
    if !grid.wait_for_data(timeout) {
        tracing::warn!(timeout_ms = timeout_millis(timeout), "contacts did not arrive in time");
    }

    let frame = render_frame(&mut grid, width, height)?;
    println!("{}", frame);
    Ok(())
}

fn frame_size(width: Option<u16>, height: Option<u16>) -> (u16, u16) {
    let detected = terminal_size::terminal_size().map(|(w, h)| (w.0, h.0));
    (
        width.or(detected.map(|(w, _)| w)).unwrap_or(DEFAULT_WIDTH),
        height.or(detected.map(|(_, h)| h)).unwrap_or(DEFAULT_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis_saturates() {
        assert_eq!(timeout_millis(Duration::from_millis(2000)), 2000);
        assert_eq!(timeout_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_frame_size_prefers_explicit_values() {
        assert_eq!(frame_size(Some(40), Some(10)), (40, 10));
    }
}
