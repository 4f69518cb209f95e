use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credential could be found for the backend.
    #[error(
        "Missing API key for the translation backend\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key_env / api_key under [backend] in ~/.config/bhasha/config.toml"
    )]
    MissingApiKey { env_var: String },

    /// The home directory could not be determined.
    #[error("Failed to determine home directory")]
    HomeDir,

    /// The config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A resolved value is unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
