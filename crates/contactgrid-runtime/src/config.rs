use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Width (in terminal cells) at which the grid switches to the wide layout.
///
/// Terminal analogue of a 720px breakpoint at roughly 10px per cell.
pub const DEFAULT_MIN_WIDE_WIDTH: u16 = 72;

/// Short weekday, short month, numeric day, numeric year.
pub const DEFAULT_DATE_FORMAT: &str = "%a, %b %-d, %Y";

pub const DEFAULT_DATE_WIDTH: u16 = 18;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CONTACTGRID_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.contactgrid
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CONTACTGRID_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("contactgrid"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".contactgrid"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports at least this wide use the multi-column layout
    pub min_wide_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_wide_width: DEFAULT_MIN_WIDE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DateConfig {
    /// strftime-style layout for the date column
    pub format: String,
    pub timezone: DateZone,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: DateZone::Local,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file with the contact list; the bundled demo list is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnsConfig {
    pub date_width: u16,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            date_width: DEFAULT_DATE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub date: DateConfig,
    pub data: DataConfig,
    pub columns: ColumnsConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.min_wide_width == 0 {
            return Err(Error::Config(
                "layout.min_wide_width must be greater than zero".to_string(),
            ));
        }
        if self.columns.date_width < 4 {
            return Err(Error::Config(
                "columns.date_width must be at least 4".to_string(),
            ));
        }
        if self.date.format.trim().is_empty() {
            return Err(Error::Config("date.format must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.layout.min_wide_width, 72);
        assert_eq!(config.date.format, "%a, %b %-d, %Y");
        assert_eq!(config.date.timezone, DateZone::Local);
        assert_eq!(config.data.path, None);
        assert_eq!(config.columns.date_width, 18);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.layout.min_wide_width = 100;
        config.date.timezone = DateZone::Utc;
        config.data.path = Some(PathBuf::from("/srv/contacts.json"));

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[layout]\nmin_wide_width = 90\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.layout.min_wide_width, 90);
        assert_eq!(loaded.columns.date_width, DEFAULT_DATE_WIDTH);
        assert_eq!(loaded.date.format, DEFAULT_DATE_FORMAT);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[layout]\nmin_wide_width = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_malformed_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[layout\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/x"), PathBuf::from("/tmp/x"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }
}
