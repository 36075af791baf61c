//! Crate configuration loaded from TOML.
//!
//! Every section and field has a default, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! [timeline]
//! day_start_hour = 6
//! day_end_hour = 18
//! slot_minutes = 15
//!
//! [tasks]
//! require_title = false
//!
//! [zone]
//! utc_offset_minutes = 60   # omit to use the host's local zone
//!
//! [calendar]
//! calendar_id = "primary"
//! max_results = 10
//!
//! [task_sync]
//! max_lists = 10
//! page_size = 100
//! ```

use crate::calendar::adapters::google::CalendarConfig;
use crate::task::adapters::google::TasksConfig;
use crate::task::services::TaskPolicy;
use crate::timeline::domain::{DayZone, TimelineConfig, TimelineConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The timeline section is inconsistent.
    #[error("invalid timeline config: {0}")]
    Timeline(#[from] TimelineConfigError),

    /// The zone offset is outside what a UTC offset can be.
    #[error("utc offset of {0} minutes is out of range")]
    InvalidOffset(i32),

    /// The calendar section is unusable.
    #[error("invalid calendar config: {0}")]
    InvalidCalendar(&'static str),

    /// The task sync section is unusable.
    #[error("invalid task sync config: {0}")]
    InvalidTaskSync(&'static str),
}

/// Zone used for day boundaries and slot placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Fixed offset east of UTC in minutes; `None` follows the host zone.
    pub utc_offset_minutes: Option<i32>,
}

impl ZoneConfig {
    /// Resolves the configured zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] for offsets of a day or more.
    pub fn day_zone(&self) -> Result<DayZone, ConfigError> {
        self.utc_offset_minutes.map_or(Ok(DayZone::Local), |minutes| {
            DayZone::from_offset_minutes(minutes).ok_or(ConfigError::InvalidOffset(minutes))
        })
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayplanConfig {
    /// Visible window and slot length.
    pub timeline: TimelineConfig,
    /// Task validation policy.
    pub tasks: TaskPolicy,
    /// Day-boundary zone.
    pub zone: ZoneConfig,
    /// Calendar provider connection.
    pub calendar: CalendarConfig,
    /// Remote task import connection.
    pub task_sync: TasksConfig,
}

impl DayplanConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and a validation
    /// error for inconsistent values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// see [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let raw = std::fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timeline.validate()?;
        self.zone.day_zone()?;
        if self.calendar.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidCalendar("base_url must not be empty"));
        }
        if self.calendar.calendar_id.trim().is_empty() {
            return Err(ConfigError::InvalidCalendar("calendar_id must not be empty"));
        }
        if self.calendar.max_results == 0 {
            return Err(ConfigError::InvalidCalendar("max_results must be positive"));
        }
        if self.task_sync.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidTaskSync("base_url must not be empty"));
        }
        if self.task_sync.max_lists == 0 || self.task_sync.page_size == 0 {
            return Err(ConfigError::InvalidTaskSync(
                "max_lists and page_size must be positive",
            ));
        }
        Ok(())
    }
}
