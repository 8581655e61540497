use std::env;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::store::ResolutionPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_COLLECTION_PATH: &str = "/api/tournaments/";
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Runtime settings for the front-end core.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api_base_url: String,
    pub collection_path: String,
    pub resolution_policy: ResolutionPolicy,
    pub time_zone: String,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            resolution_policy: ResolutionPolicy::default(),
            time_zone: "UTC".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// How dates are presented by the formatting helpers.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub time_zone: Tz,
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { time_zone: Tz::UTC, date_format: DEFAULT_DATE_FORMAT.to_string() }
    }
}

impl Config {
    /// Read settings from `TOURNAMENT_*` environment variables, keeping the
    /// default for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(url) = lookup("TOURNAMENT_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(path) = lookup("TOURNAMENT_COLLECTION_PATH") {
            config.collection_path = path;
        }
        if let Some(policy) = lookup("TOURNAMENT_RESOLUTION_POLICY") {
            config.resolution_policy = policy.parse()?;
        }
        if let Some(tz) = lookup("TOURNAMENT_TIME_ZONE") {
            config.time_zone = tz;
        }
        if let Some(fmt) = lookup("TOURNAMENT_DATE_FORMAT") {
            config.date_format = fmt;
        }
        config.display()?;
        info!(base_url = %config.api_base_url, policy = ?config.resolution_policy, "Loaded config");
        Ok(config)
    }

    /// Parse a JSON payload; missing keys take their defaults.
    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(body)?;
        config.display()?;
        Ok(config)
    }

    /// Full URL of the tournament collection.
    pub fn collection_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if self.collection_path.starts_with('/') {
            format!("{}{}", base, self.collection_path)
        } else {
            format!("{}/{}", base, self.collection_path)
        }
    }

    pub fn display(&self) -> Result<DisplayConfig, ConfigError> {
        let time_zone = self
            .time_zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::TimeZone(self.time_zone.clone()))?;
        Ok(DisplayConfig { time_zone, date_format: self.date_format.clone() })
    }
}
