use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use contactgrid_runtime::{DateConfig, DateZone, config::DEFAULT_DATE_FORMAT};

/// Shown in place of a date that could not be parsed.
pub const DATE_PLACEHOLDER: &str = "-";

/// Localized date display for normalized timestamps.
#[derive(Debug, Clone)]
pub struct DateDisplay {
    format: String,
    zone: DateZone,
}

impl DateDisplay {
    pub fn new(format: &str, zone: DateZone) -> Result<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            bail!("invalid date format: {:?}", format);
        }
        Ok(Self {
            format: format.to_string(),
            zone,
        })
    }

    pub fn from_config(config: &DateConfig) -> Result<Self> {
        Self::new(&config.format, config.timezone)
    }

    pub fn format_timestamp(&self, ts: DateTime<Utc>) -> String {
        match self.zone {
            DateZone::Utc => ts.format(&self.format).to_string(),
            DateZone::Local => ts.with_timezone(&Local).format(&self.format).to_string(),
        }
    }

    /// Render an ISO-8601 timestamp, or the placeholder when absent/invalid.
    pub fn render(&self, iso: Option<&str>) -> String {
        iso.and_then(|iso| DateTime::parse_from_rfc3339(iso).ok())
            .map(|dt| self.format_timestamp(dt.with_timezone(&Utc)))
            .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            zone: DateZone::Local,
        }
    }
}
