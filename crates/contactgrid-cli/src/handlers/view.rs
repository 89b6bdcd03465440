use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tokio::runtime::Runtime;

use crate::component::ContactGrid;
use crate::context::AppContext;
use crate::presentation::renderers::TuiRenderer;

pub fn handle(ctx: &AppContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the interactive view needs a terminal; use `contactgrid render` for headless output");
    }

    let runtime = Runtime::new()?;
    let mut grid = ContactGrid::new(ctx.source()?, runtime.handle().clone(), ctx.grid_settings()?);

    TuiRenderer::new().run(&mut grid)
}
