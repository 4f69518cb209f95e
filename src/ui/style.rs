//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

fn paint<T: Display, S: Display>(text: T, styled: impl FnOnce(&T) -> S) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text).to_string()
    }
}

impl Style {
    /// Section headers (e.g., the menu title)
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Labels/keys (e.g., "endpoint", "model")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Primary values (e.g., menu keys, model names)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Secondary/supplementary info
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().italic().to_string())
    }
}
