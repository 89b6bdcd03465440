use clap::{Parser, Subcommand};

use crate::types::{LayoutArg, LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "contactgrid")]
#[command(about = "Browse a contact list in a grid that adapts to the terminal width", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (config.toml, log file). Defaults to CONTACTGRID_PATH or the XDG data dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Contacts JSON file, overriding data.path from the config
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Terminal width at which the wide layout kicks in
    #[arg(long, global = true)]
    pub min_wide_width: Option<u16>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Log file for the interactive view (default: <data dir>/contactgrid.log)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Interactive grid (default)
    View,

    /// Render one frame headlessly and print it
    Render {
        /// Defaults to the current terminal width, or 80
        #[arg(long)]
        width: Option<u16>,

        /// Defaults to the current terminal height, or 24
        #[arg(long)]
        height: Option<u16>,

        #[arg(long, value_enum, default_value_t = LayoutArg::Auto)]
        mode: LayoutArg,

        /// How long to wait for the contact list before drawing
        #[arg(long, default_value_t = 2000)]
        timeout_ms: u64,
    },

    /// Print the normalized contact list
    Normalize {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Manage config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config.toml
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
}
