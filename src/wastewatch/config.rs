use crate::error::{ReportError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TRACK_INTERVAL_MS: u64 = 1600;
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const CONFIG_KEYS: [&str; 2] = ["track-interval-ms", "date-format"];

/// Configuration for wastewatch, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WastewatchConfig {
    /// Delay between pickup tracker stages, in milliseconds
    #[serde(default = "default_track_interval_ms")]
    pub track_interval_ms: u64,

    /// strftime-style format for showing report dates in local time
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_track_interval_ms() -> u64 {
    DEFAULT_TRACK_INTERVAL_MS
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for WastewatchConfig {
    fn default() -> Self {
        Self {
            track_interval_ms: DEFAULT_TRACK_INTERVAL_MS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl WastewatchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ReportError::Io)?;
        let config: WastewatchConfig =
            serde_json::from_str(&content).map_err(ReportError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ReportError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ReportError::Serialization)?;
        fs::write(config_path, content).map_err(ReportError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "track-interval-ms" => Ok(self.track_interval_ms.to_string()),
            "date-format" => Ok(self.date_format.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "track-interval-ms" => {
                self.track_interval_ms = value.trim().parse().map_err(|_| {
                    ReportError::Config(format!(
                        "track-interval-ms must be a whole number of milliseconds, got '{}'",
                        value
                    ))
                })?;
            }
            "date-format" => {
                if value.trim().is_empty() {
                    return Err(ReportError::Config("date-format cannot be empty".into()));
                }
                if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
                    return Err(ReportError::Config(format!(
                        "date-format '{}' is not a valid strftime format",
                        value
                    )));
                }
                self.date_format = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ReportError {
    ReportError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
