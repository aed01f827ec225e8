//! Configuration for farm-ai
//!
//! Bootstrap configuration loaded once from TOML (see `farm_common::config` for
//! file discovery). Every field has a built-in default, so an empty file or no
//! file at all yields a usable configuration. API keys resolve
//! Environment → TOML and are passed to each client at construction.

use farm_common::config::{load_toml_config, resolve_api_key, resolve_config_path};
use farm_common::logging::{init_tracing, LoggingConfig};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Upload limit for image payloads (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

pub const PLANT_ID_KEY_ENV: &str = "FARM_PLANT_ID_API_KEY";
pub const TREFLE_KEY_ENV: &str = "FARM_TREFLE_API_KEY";
pub const GEMINI_KEY_ENV: &str = "FARM_GEMINI_API_KEY";
pub const OPENAI_KEY_ENV: &str = "FARM_OPENAI_API_KEY";

/// Complete analysis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub plant_id: ServiceConfig,
    pub trefle: ServiceConfig,
    pub gemini: GeminiConfig,
    pub wikipedia: ServiceConfig,
    pub openai: OpenAiConfig,
    pub timeouts: TimeoutConfig,
    pub max_image_bytes: u64,
    pub logging: LoggingConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            plant_id: ServiceConfig::default(),
            trefle: ServiceConfig::default(),
            gemini: GeminiConfig::default(),
            wikipedia: ServiceConfig::default(),
            openai: OpenAiConfig::default(),
            timeouts: TimeoutConfig::default(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            logging: LoggingConfig::default(),
        }
    }
}

/// Endpoint and credential for one remote service
///
/// An unset `base_url` means the client's public default endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ServiceConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key: None,
        }
    }

    /// Configured base URL (or `default`) without trailing slash
    pub fn base_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(default)
            .trim_end_matches('/')
    }

    /// API key, empty when unconfigured
    pub fn key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}

/// Generative-text service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    #[serde(flatten)]
    pub service: ServiceConfig,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            model: "gemini-1.5-flash".to_string(),
        }
    }
}

/// Chat-completion service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    #[serde(flatten)]
    pub service: ServiceConfig,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 512,
            temperature: 0.7,
        }
    }
}

/// Per-client HTTP timeouts in seconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_secs: u64,
    pub read_secs: u64,
    pub write_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 30,
            read_secs: 60,
            write_secs: 60,
        }
    }
}

impl TimeoutConfig {
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    /// Whole-request deadline once connected
    ///
    /// reqwest exposes a single request timeout, so the read and write
    /// budgets are added together.
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.read_secs + self.write_secs)
    }
}

impl AnalysisConfig {
    /// Load configuration and resolve API keys from the environment
    pub fn load(explicit_path: Option<&Path>) -> farm_common::Result<Self> {
        let path = resolve_config_path(explicit_path);
        let mut config: AnalysisConfig = load_toml_config(path.as_deref())?;
        config.resolve_keys();
        Ok(config)
    }

    /// Install the global tracing subscriber from the `[logging]` section
    ///
    /// Fails if a subscriber is already installed.
    pub fn init_logging(&self) -> farm_common::Result<()> {
        init_tracing(&self.logging)
    }

    /// Apply Environment → TOML priority to every API key
    pub fn resolve_keys(&mut self) {
        self.plant_id.api_key = resolve_api_key(PLANT_ID_KEY_ENV, self.plant_id.api_key.as_deref());
        self.trefle.api_key = resolve_api_key(TREFLE_KEY_ENV, self.trefle.api_key.as_deref());
        self.gemini.service.api_key =
            resolve_api_key(GEMINI_KEY_ENV, self.gemini.service.api_key.as_deref());
        self.openai.service.api_key =
            resolve_api_key(OPENAI_KEY_ENV, self.openai.service.api_key.as_deref());
    }
}
