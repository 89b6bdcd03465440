use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use contactgrid_runtime::{
    BundledSource, Config, ContactSource, JsonFileSource,
    config::{expand_tilde, resolve_data_dir},
};
use once_cell::sync::OnceCell;

use crate::args::Cli;
use crate::component::GridSettings;

const LOG_FILE_NAME: &str = "contactgrid.log";

/// Data directory plus the effective configuration (file values with CLI
/// overrides applied). The config is read on first use.
pub struct AppContext {
    data_dir: PathBuf,
    data_override: Option<PathBuf>,
    min_wide_width: Option<u16>,
    config: OnceCell<Config>,
}

impl AppContext {
    pub fn new(
        data_dir: PathBuf,
        data_override: Option<PathBuf>,
        min_wide_width: Option<u16>,
    ) -> Self {
        Self {
            data_dir,
            data_override,
            min_wide_width,
            config: OnceCell::new(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
        Ok(Self::new(
            data_dir,
            cli.data.as_deref().map(expand_tilde),
            cli.min_wide_width,
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| -> Result<Config> {
            let mut config = Config::load_from(&self.config_path())?;
            if let Some(path) = &self.data_override {
                config.data.path = Some(path.clone());
            }
            if let Some(width) = self.min_wide_width {
                config.layout.min_wide_width = width;
            }
            config.validate()?;
            Ok(config)
        })
    }

    /// File source when a contacts file is configured, bundled demo list otherwise.
    pub fn source(&self) -> Result<Arc<dyn ContactSource>> {
        let source: Arc<dyn ContactSource> = match &self.config()?.data.path {
            Some(path) => Arc::new(JsonFileSource::new(path)),
            None => Arc::new(BundledSource),
        };
        Ok(source)
    }

    pub fn grid_settings(&self) -> Result<GridSettings> {
        GridSettings::from_config(self.config()?)
    }
}
