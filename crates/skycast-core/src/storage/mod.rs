mod config;

pub use config::{
    Config, ForecastConfig, HomeConfig, LocationConfig, NotificationsConfig, ProviderConfig,
};

use std::path::PathBuf;

/// Returns `~/.config/skycast[-dev]/` based on SKYCAST_ENV.
///
/// Set SKYCAST_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SKYCAST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("skycast-dev")
    } else {
        base_dir.join("skycast")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
