//! Configuration file discovery, TOML loading and API key resolution
//!
//! Resolution priority for the configuration file:
//! 1. Explicit path supplied by the caller
//! 2. `FARM_CONFIG` environment variable
//! 3. `<config_dir>/farm/farm-ai.toml` when it exists
//! 4. Built-in defaults (no file)
//!
//! API keys resolve Environment → TOML.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "FARM_CONFIG";

const CONFIG_DIR_NAME: &str = "farm";
const CONFIG_FILE_NAME: &str = "farm-ai.toml";

/// Locate the configuration file to load, if any
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: caller-supplied path
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    // Priority 2: environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: platform config directory
    let default_path = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))?;
    if default_path.exists() {
        Some(default_path)
    } else {
        None
    }
}

/// Load a TOML configuration struct
///
/// `None` yields `T::default()`. A path that was named explicitly but cannot
/// be read or parsed is an error.
pub fn load_toml_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        info!("No configuration file found, using built-in defaults");
        return Ok(T::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

/// Resolve an API key from environment variable, then TOML value
///
/// Blank values count as absent. Returns `None` when neither source has a key.
pub fn resolve_api_key(env_var: &str, toml_value: Option<&str>) -> Option<String> {
    let env_key = std::env::var(env_var).ok().filter(|k| is_valid_key(k));
    let toml_key = toml_value.filter(|k| is_valid_key(k));

    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "API key for {} found in environment and TOML. Using environment (highest priority).",
            env_var
        );
    }

    if let Some(key) = env_key {
        info!("API key loaded from environment variable {}", env_var);
        return Some(key);
    }

    toml_key.map(|k| k.trim().to_string())
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Standard User-Agent for outbound HTTP clients
pub fn get_user_agent() -> String {
    format!("farm-ai/{}", env!("CARGO_PKG_VERSION"))
}
