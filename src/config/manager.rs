use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ConfigError;
use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Environment variable consulted for the API key unless `api_key_env` says otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings in the `[backend]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// OpenAI-compatible API base URL.
    pub endpoint: Option<String>,
    /// Model name sent with each request.
    pub model: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Name of the environment variable holding the API key.
    pub fn api_key_env_name(&self) -> &str {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env_name())
            && !key.trim().is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.trim().is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/bhasha/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default. The API key
/// has no built-in default; its absence is an error.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let backend = &config_file.backend;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(backend.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if endpoint.trim().is_empty() {
        return Err(ConfigError::Invalid("'endpoint' must not be empty".into()));
    }

    match Url::parse(&endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => {
            return Err(ConfigError::Invalid(format!(
                "'endpoint' must be an http(s) URL, got scheme '{}'",
                url.scheme()
            )));
        }
        Err(e) => {
            return Err(ConfigError::Invalid(format!(
                "'endpoint' is not a valid URL ({endpoint}): {e}"
            )));
        }
    }

    let model = options
        .model
        .as_ref()
        .or(backend.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if model.trim().is_empty() {
        return Err(ConfigError::Invalid("'model' must not be empty".into()));
    }

    let timeout = match options.timeout_secs.or(backend.timeout_secs) {
        Some(0) => {
            return Err(ConfigError::Invalid(
                "'timeout_secs' must be greater than zero".into(),
            ));
        }
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    let api_key = backend
        .get_api_key()
        .ok_or_else(|| ConfigError::MissingApiKey {
            env_var: backend.api_key_env_name().to_string(),
        })?;

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key,
        timeout,
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/bhasha/config.toml`
    /// or `~/.config/bhasha/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
