//! Configure command handler for editing backend settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Text};

use crate::config::{BackendConfig, ConfigFile, ConfigManager};
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use crate::ui::{Style, run_cancellable};

/// Runs the configure command.
///
/// With `show`, prints the current settings. Otherwise prompts for each
/// `[backend]` value and saves the file. The API key itself is never asked
/// for; only the name of the environment variable holding it.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;

    if show {
        print_config(&manager, &config);
        return Ok(());
    }

    print_config(&manager, &config);

    let Some(backend) = run_cancellable(|| prompt_backend(&config.backend))? else {
        return Ok(());
    };

    config.backend = backend;
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let backend = &config.backend;
    let or_default = |value: Option<&str>, default: &str| {
        value.map_or_else(
            || format!("{} {}", Style::value(default), Style::secondary("(default)")),
            Style::value,
        )
    };

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}         {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        or_default(backend.endpoint.as_deref(), DEFAULT_ENDPOINT)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        or_default(backend.model.as_deref(), DEFAULT_MODEL)
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        Style::value(backend.api_key_env_name())
    );
    println!(
        "  {}      {}",
        Style::label("api_key"),
        if backend.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!(
        "  {}      {}",
        Style::label("timeout"),
        backend.timeout_secs.map_or_else(
            || format!(
                "{} {}",
                Style::value(format!("{}s", DEFAULT_TIMEOUT.as_secs())),
                Style::secondary("(default)")
            ),
            |secs| Style::value(format!("{secs}s"))
        )
    );
    println!();
}

fn prompt_backend(current: &BackendConfig) -> Result<BackendConfig> {
    let endpoint = Text::new("Endpoint:")
        .with_default(current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("OpenAI-compatible API base URL")
        .prompt()?;

    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    let model = Text::new("Model:")
        .with_default(current.model.as_deref().unwrap_or(DEFAULT_MODEL))
        .prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    let api_key_env = Text::new("API key environment variable:")
        .with_default(current.api_key_env_name())
        .prompt()?;

    let timeout_secs = CustomType::<u64>::new("Timeout (seconds):")
        .with_default(current.timeout_secs.unwrap_or(DEFAULT_TIMEOUT.as_secs()))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    if timeout_secs == 0 {
        bail!("Timeout must be greater than zero");
    }

    Ok(BackendConfig {
        endpoint: Some(endpoint.trim().to_string()),
        model: Some(model.trim().to_string()),
        api_key_env: Some(api_key_env.trim().to_string()).filter(|name| !name.is_empty()),
        api_key: current.api_key.clone(),
        timeout_secs: Some(timeout_secs),
    })
}
