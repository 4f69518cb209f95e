//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

/// Exit codes for command failures.
pub mod exit;

pub use args::{Args, Command};
pub use exit::exit_code_for;
