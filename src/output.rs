//! Global output configuration and diagnostics logging.
//!
//! - Translation output goes to stdout
//! - Status messages, progress, logs and errors go to stderr
//! - Quiet mode suppresses non-essential output
//! - Colors can be disabled via flag or the `NO_COLOR` environment variable

use std::io::{self, Write};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Initialize the global output configuration.
///
/// Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Default filter directive for the given verbosity.
pub fn log_directive(verbose: bool) -> &'static str {
    if verbose {
        "bhasha=debug,bhasha_cli=debug"
    } else {
        "warn"
    }
}

/// Installs the `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` overrides the verbosity-derived default.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!is_no_color())
        .try_init();
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Flush stderr.
pub fn flush_stderr() {
    let _ = io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_not_quiet() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(true), "bhasha=debug,bhasha_cli=debug");
        assert_eq!(log_directive(false), "warn");
    }

    #[test]
    fn test_verbose_directive_covers_binary_and_library() {
        let directive = log_directive(true);
        assert!(directive.split(',').any(|d| d == "bhasha=debug"));
        assert!(directive.split(',').any(|d| d == "bhasha_cli=debug"));
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
