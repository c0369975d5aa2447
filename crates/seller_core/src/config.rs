//! Console runtime configuration.
//!
//! # Responsibility
//! - Collect page size, logging settings and the startup data source.
//! - Accept a JSON document and `SELLER_*` environment overrides.
//!
//! # Invariants
//! - A validated config has `items_per_page > 0`, a supported log level and,
//!   when set, an absolute log directory.

use crate::logging::{default_log_level, normalize_level};
use crate::view::pagination::DEFAULT_ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_ITEMS_PER_PAGE: &str = "SELLER_ITEMS_PER_PAGE";
pub const ENV_LOG_LEVEL: &str = "SELLER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "SELLER_LOG_DIR";
pub const ENV_LEADS_PATH: &str = "SELLER_LEADS_PATH";

#[derive(Debug)]
pub enum ConfigError {
    /// JSON document could not be decoded.
    Malformed(String),
    /// A setting has an unusable value.
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(message) => write!(f, "malformed config: {message}"),
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one console process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Rows per table page.
    pub items_per_page: usize,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Rolling log directory; stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// External lead data file; bundled data set when unset.
    pub leads_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            log_level: default_log_level().to_string(),
            log_dir: None,
            leads_path: None,
        }
    }
}

impl ConsoleConfig {
    /// Decodes a JSON config document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from defaults plus process environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `SELLER_*` key/value overrides; unrelated keys are ignored.
    ///
    /// Empty values for path keys unset the path.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let value = value.into();
            match key.as_ref() {
                ENV_ITEMS_PER_PAGE => self.items_per_page = parse_page_size(&value)?,
                ENV_LOG_LEVEL => self.log_level = value,
                ENV_LOG_DIR => self.log_dir = non_empty_path(&value),
                ENV_LEADS_PATH => self.leads_path = non_empty_path(&value),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                key: "items_per_page",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        normalize_level(&self.log_level).map_err(|reason| ConfigError::InvalidValue {
            key: "log_level",
            value: self.log_level.clone(),
            reason,
        })?;

        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: "log_dir",
                    value: dir.display().to_string(),
                    reason: "must be an absolute path".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn parse_page_size(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|err| ConfigError::InvalidValue {
            key: ENV_ITEMS_PER_PAGE,
            value: value.to_string(),
            reason: format!("{err}"),
        })
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
