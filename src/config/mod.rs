use crate::errors::{AppError, AppResult};
use crate::models::TimeSlot;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const MORNING_SLOT_LABEL: &str = "Usual morning slot";
pub const AFTERNOON_SLOT_LABEL: &str = "Usual afternoon slot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_completed_tag")]
    pub completed_tag: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_morning_slot")]
    pub morning_slot: String,
    #[serde(default = "default_afternoon_slot")]
    pub afternoon_slot: String,
    #[serde(default = "default_total_label")]
    pub total_label: String,
    /// Always work on this sheet instead of asking (set by --sheet)
    #[serde(skip)]
    pub sheet: Option<String>,
}

fn default_completed_tag() -> String {
    "[COMPLETED]".to_string()
}
fn default_log_file() -> String {
    "ATS.log".to_string()
}
fn default_log_level() -> String {
    "debug".to_string()
}
fn default_morning_slot() -> String {
    "08:30-11:00".to_string()
}
fn default_afternoon_slot() -> String {
    "13:30-16:00".to_string()
}
fn default_total_label() -> String {
    "Total Hours:".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completed_tag: default_completed_tag(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            morning_slot: default_morning_slot(),
            afternoon_slot: default_afternoon_slot(),
            total_label: default_total_label(),
            sheet: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("autotimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".autotimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("autotimesheet.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> AppResult<()> {
        self.time_slots()?;

        if self.completed_tag.trim().is_empty() {
            return Err(AppError::Config("completed_tag must not be empty".into()));
        }

        Ok(())
    }

    /// The preset slots offered in the class time menu (morning, afternoon)
    pub fn time_slots(&self) -> AppResult<Vec<TimeSlot>> {
        let slot = |label: &str, range: &str, key: &str| {
            TimeSlot::from_range(label, range)
                .map_err(|e| AppError::Config(format!("{key}: {e}")))
        };

        Ok(vec![
            slot(MORNING_SLOT_LABEL, &self.morning_slot, "morning_slot")?,
            slot(AFTERNOON_SLOT_LABEL, &self.afternoon_slot, "afternoon_slot")?,
        ])
    }
}
