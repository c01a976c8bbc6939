//! File-driven formatting configuration.
//!
//! A [`FormatConfig`] names the locale, the data bundle, the formatter
//! options, the sink size, and the log filter for one formatting session.
//! It loads from TOML or JSON; every field has a default.
//!
//! ```toml
//! locale = "bn"
//! data_path = "testdata/data/json"
//! grouping = "min2"
//! sign_display = "except_zero"
//! sink_capacity = 40
//! ```

use std::path::{Path, PathBuf};

use fixfmt_core::{FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::locale::Locale;
use crate::provider::DataProvider;

/// Buffer size used when a config does not set one. Includes the NUL byte.
pub const DEFAULT_SINK_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Language identifier to format for.
    pub locale: String,

    /// Root of a JSON data bundle; the invariant provider is used when unset.
    pub data_path: Option<PathBuf>,

    pub grouping: GroupingStrategy,

    pub sign_display: SignDisplay,

    /// Size of the output buffer in bytes, terminator included.
    pub sink_capacity: usize,

    /// `tracing` filter directive; `FIXFMT_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: "und".to_string(),
            data_path: None,
            grouping: GroupingStrategy::Auto,
            sign_display: SignDisplay::Auto,
            sink_capacity: DEFAULT_SINK_CAPACITY,
            log_filter: "warn".to_string(),
        }
    }
}

impl FormatConfig {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_json_str(s: &str) -> std::result::Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load by extension (`.json` is JSON, anything else TOML) and validate.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        Ok(config)
    }

    /// Returns a list of problems; empty means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.locale.trim().is_empty() {
            errors.push("locale must not be empty".into());
        }

        // One byte is always reserved for the terminator.
        if self.sink_capacity < 2 {
            errors.push(format!(
                "sink_capacity must be >= 2, got {}",
                self.sink_capacity
            ));
        }

        if let Some(path) = &self.data_path {
            if path.as_os_str().is_empty() {
                errors.push("data_path must not be empty when set".into());
            }
        }

        errors
    }

    #[must_use]
    pub fn to_options(&self) -> FixedDecimalFormatOptions {
        FixedDecimalFormatOptions {
            grouping_strategy: self.grouping,
            sign_display: self.sign_display,
        }
    }

    pub fn open_locale(&self) -> Result<Locale> {
        Locale::new(&self.locale)
    }

    /// The bundle at `data_path`, or the invariant provider.
    pub fn open_provider(&self) -> Result<DataProvider> {
        match &self.data_path {
            Some(path) => DataProvider::from_fs(path),
            None => DataProvider::invariant(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[source] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
