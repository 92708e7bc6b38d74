//! Application configuration.
//!
//! Loaded from a TOML file. Every field has a default, so an empty file
//! (or no file at all) yields the stock demo setup.

use std::path::Path;

use chrono::FixedOffset;
use lagekarte_map::{MapOptions, TileLayer};
use lagekarte_store::DataSource;
use serde::{Deserialize, Serialize};

/// Fraction of the visible span added on each side when fitting the
/// viewport to the markers.
pub const DEFAULT_FIT_PADDING: f64 = 0.2;

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`AppConfig`].
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The popup time offset is out of range.
    #[error("invalid UTC offset: {minutes} minutes")]
    InvalidOffset {
        /// The rejected offset.
        minutes: i32,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Initial viewport and zoom limits.
    pub map: MapOptions,
    /// Base tile layer.
    pub tiles: TileLayer,
    /// Where incidents come from.
    pub data: DataSource,
    /// Padding ratio applied to the marker bounds before fitting.
    pub fit_padding: f64,
    /// Whether the time-range selector is available. When `false` only
    /// the category selector filters.
    pub time_filter: bool,
    /// Offset from UTC, in minutes, used to format popup timestamps.
    /// Defaults to the host's local offset.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: MapOptions::default(),
            tiles: TileLayer::default(),
            data: DataSource::default(),
            fit_padding: DEFAULT_FIT_PADDING,
            time_filter: true,
            utc_offset_minutes: None,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is invalid.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Reading config from {}", path.display());
        let body = std::fs::read_to_string(path)?;
        Self::from_toml_str(&body)
    }

    /// The fixed offset popup timestamps are rendered in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] if the configured offset is
    /// a day or more away from UTC.
    pub fn popup_offset(&self) -> Result<FixedOffset, ConfigError> {
        match self.utc_offset_minutes {
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or(ConfigError::InvalidOffset { minutes }),
            None => Ok(*chrono::Local::now().offset()),
        }
    }
}
