//! Configuration management for the devtools recorder.
//!
//! This module provides configuration loading, validation, and access
//! through a singleton pattern. Configuration is read from host settings
//! under the "store-devtools" key and merged with defaults.

pub mod schema;

pub use schema::DevtoolsConfig;

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Global configuration instance.
///
/// Lazily initialized on first access; updated when settings change.
static CONFIG: Lazy<RwLock<DevtoolsConfig>> =
    Lazy::new(|| RwLock::new(DevtoolsConfig::default()));

/// Loads configuration from host settings or a JSON value.
///
/// Reads the "store-devtools" settings key, merges it with defaults,
/// validates the result, and updates the global configuration.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing user settings under
///   the "store-devtools" key
///
/// # Returns
///
/// `Ok(DevtoolsConfig)` with the loaded configuration, or `Err` if
/// validation fails.
///
/// # Example
///
/// ```
/// use store_devtools::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "store-devtools": {
///         "captureStackTraces": false,
///         "maxHistoryEntries": 250
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.max_history_entries, 250);
/// # load_config(None).unwrap();
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<DevtoolsConfig, String> {
    let mut config = DevtoolsConfig::default();

    if let Some(settings) = settings_json {
        if let Some(devtools_settings) = settings.get("store-devtools") {
            match serde_json::from_value::<DevtoolsConfig>(devtools_settings.clone()) {
                Ok(user_config) => {
                    config = config.merge(&user_config);
                }
                Err(e) => {
                    log::warn!(
                        "failed to parse store-devtools settings: {}; using defaults",
                        e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}. Using defaults.", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Gets the current global configuration.
///
/// Singleton accessor returning a clone of the current configuration. If
/// configuration has not been loaded yet, returns the defaults.
pub fn get_config() -> DevtoolsConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| DevtoolsConfig::default())
}

/// Updates a specific configuration setting in place.
///
/// # Arguments
///
/// * `updater` - A closure that modifies the configuration
pub fn update_config(updater: impl FnOnce(&mut DevtoolsConfig)) {
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);
    }
}
