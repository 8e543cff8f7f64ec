//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Home network identifier (for the context tracker's at-home rule)
//! - Notification preferences
//! - Location-service tuning (scan window, re-detection interval)
//! - Forecast window and filler seed
//! - Weather provider access
//!
//! Configuration is stored at `~/.config/skycast/config.toml`.

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::alerts::AlertSeverity;

/// Home identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Home WiFi network name, compared against the connected network by
    /// the context tracker. Unset means the at-home rule never fires.
    #[serde(default)]
    pub network_ssid: Option<String>,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Only alerts at or above this severity are surfaced.
    #[serde(default = "default_severity_threshold")]
    pub severity_threshold: AlertSeverity,
}

/// Location-service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_true")]
    pub services_enabled: bool,
    /// Proximity scan window per detection cycle, in milliseconds.
    #[serde(default = "default_scan_window_ms")]
    pub scan_window_ms: u64,
    /// Period of the background re-detection timer, in seconds.
    #[serde(default = "default_detection_interval_secs")]
    pub detection_interval_secs: u64,
}

/// Forecast window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Guaranteed number of daily entries handed to consumers.
    #[serde(default = "default_window_days")]
    pub window_days: usize,
    /// Fixed seed for the continuity filler (None = entropy-seeded).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Weather provider access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/skycast/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_severity_threshold() -> AlertSeverity {
    AlertSeverity::Moderate
}
fn default_scan_window_ms() -> u64 {
    3000
}
fn default_detection_interval_secs() -> u64 {
    300
}
fn default_window_days() -> usize {
    7
}
fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".into()
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity_threshold: default_severity_threshold(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            services_enabled: true,
            scan_window_ms: default_scan_window_ms(),
            detection_interval_secs: default_detection_interval_secs(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            seed: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: HomeConfig::default(),
            notifications: NotificationsConfig::default(),
            location: LocationConfig::default(),
            forecast: ForecastConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| format!("cannot parse '{value}' as number"))?
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::String(_) | serde_json::Value::Null => {
                        serde_json::Value::String(value.to_string())
                    }
                    _ => return Err(format!("cannot set structured key: {key}").into()),
                };
                obj.insert(part.to_string(), new_value);
            } else {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
            }
        }
        Ok(())
    }

    fn path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults when no config exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config cannot be parsed, or a fresh
    /// default cannot be written.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
