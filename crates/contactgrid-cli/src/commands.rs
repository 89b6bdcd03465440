use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use contactgrid_runtime::config::expand_tilde;

use super::args::{Cli, Commands, ConfigCommand};
use super::context::AppContext;
use super::handlers;
use super::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    let command = cli.command.clone().unwrap_or(Commands::View);

    let target = match command {
        Commands::View => LogTarget::File(
            cli.log_file
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| ctx.default_log_file()),
        ),
        _ => match cli.log_file.as_deref() {
            Some(path) => LogTarget::File(PathBuf::from(path)),
            None => LogTarget::Stderr,
        },
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "starting");

    match command {
        Commands::View => handlers::view::handle(&ctx),

        Commands::Render {
            width,
            height,
            mode,
            timeout_ms,
        } => handlers::render::handle(
            &ctx,
            width,
            height,
            mode,
            Duration::from_millis(timeout_ms),
        ),

        Commands::Normalize { format } => handlers::normalize::handle(&ctx, format),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show { format } => handlers::config::show(&ctx, format),
        },
    }
}
