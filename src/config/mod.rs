mod error;
mod manager;

pub use error::ConfigError;
pub use manager::{
    BackendConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, ResolveOptions, ResolvedConfig,
    resolve_config,
};
