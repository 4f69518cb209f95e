//! # bhasha - English to Indian-language translation CLI
//!
//! `bhasha` sends English text to an OpenAI-compatible LLM endpoint
//! (Gemini by default) and prints the translation in one of ten Indian
//! languages.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//!
//! # Interactive: pick a language from the menu, then type the text
//! bhasha
//!
//! # Non-interactive
//! bhasha --to ta "Good morning"
//!
//! # List the menu keys and language codes
//! bhasha languages
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/bhasha/config.toml`:
//!
//! ```toml
//! [backend]
//! endpoint = "https://generativelanguage.googleapis.com/v1beta/openai"
//! model = "gemini-2.5-flash"
//! api_key_env = "GEMINI_API_KEY"
//! timeout_secs = 60
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Line-oriented prompting on stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// Language registry, translator and completion backends.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
