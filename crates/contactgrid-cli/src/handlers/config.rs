use anyhow::{Result, bail};
use contactgrid_runtime::Config;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::types::OutputFormat;

pub fn init(ctx: &AppContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    if std::io::stdout().is_terminal() {
        println!("{} Wrote {}", "✓".green(), path.display());
    } else {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn show(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let config = ctx.config()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            println!("# {}", ctx.config_path().display());
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}
