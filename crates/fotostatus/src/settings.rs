use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::LevelFilter;

use base::entities::{DEFAULT_API_CONFIG, DEFAULT_API_URL};
use status_api::StatusApiSettings;

pub const STORE_PATH_ENV: &str = "FOTOSTATUS_STORE_PATH";
pub const API_URL_ENV: &str = "FOTOSTATUS_API_URL";
pub const API_CONFIG_ENV: &str = "FOTOSTATUS_API_CONFIG";
pub const REQUEST_DELAY_MS_ENV: &str = "FOTOSTATUS_REQUEST_DELAY_MS";
pub const LOG_LEVEL_ENV: &str = "FOTOSTATUS_LOG_LEVEL";
pub const LOG_FILE_ENV: &str = "FOTOSTATUS_LOG_FILE";

pub const APP_DIR_NAME: &str = "fotoparadies-status";
pub const STORE_FILE_NAME: &str = "orders.json";

pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` means the per-user config directory.
    pub store_path: Option<PathBuf>,
    pub status_api: StatusApiSettings,
    pub request_delay: Duration,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: None,
            status_api: Default::default(),
            request_delay: DEFAULT_REQUEST_DELAY,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_config = match value_of(API_CONFIG_ENV) {
            Some(value) => value
                .trim()
                .parse()
                .context(format!("{} must be a number, got {}", API_CONFIG_ENV, value))?,
            None => DEFAULT_API_CONFIG,
        };

        let request_delay = match value_of(REQUEST_DELAY_MS_ENV) {
            Some(value) => Duration::from_millis(value.trim().parse().context(format!(
                "{} must be a number of milliseconds, got {}",
                REQUEST_DELAY_MS_ENV, value
            ))?),
            None => DEFAULT_REQUEST_DELAY,
        };

        let log_level = match value_of(LOG_LEVEL_ENV) {
            Some(value) => value
                .trim()
                .parse()
                .context(format!("{} is not a log level: {}", LOG_LEVEL_ENV, value))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            store_path: value_of(STORE_PATH_ENV).map(PathBuf::from),
            status_api: StatusApiSettings {
                url: value_of(API_URL_ENV).unwrap_or_else(|| String::from(DEFAULT_API_URL)),
                config: api_config,
            },
            request_delay,
            log_level,
            log_file: value_of(LOG_FILE_ENV).map(PathBuf::from),
        })
    }

    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
                .context("no config directory is known for the current user, set a store path"),
        }
    }
}
