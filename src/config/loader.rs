//! Configuration loading from the file system

use std::path::Path;
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::{expand_path, Config};

/// Load configuration from ~/.settings-kit/config.json
///
/// Returns Config::default() if the file is missing or invalid.
pub fn load_config() -> Config {
    load_config_from(&expand_path(DEFAULT_CONFIG_PATH))
}

/// Load configuration from an explicit path.
///
/// A missing file is normal (defaults are used); a file that can't be read
/// or parsed is logged as a warning and also falls back to defaults.
#[instrument(name = "load_config")]
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            let error_hint = if e.to_string().contains("unknown variant") {
                "\n\nHint: brush.defaultShape must be one of \"point\", \"square\", \"circle\", \"custom\""
            } else {
                ""
            };
            warn!(
                path = %config_path.display(),
                error = %e,
                hint = %error_hint,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
