//! The fixed registry of target languages offered in the menu.

use crate::ui::Style;

/// One selectable target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Menu key the user types to select this language.
    pub key: &'static str,
    /// Human-readable language name.
    pub display_name: &'static str,
    /// ISO 639-1 code passed to the backend.
    pub code: &'static str,
}

impl LanguageEntry {
    const fn new(key: &'static str, display_name: &'static str, code: &'static str) -> Self {
        Self {
            key,
            display_name,
            code,
        }
    }
}

/// Supported Indian languages, in menu order.
pub const INDIAN_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry::new("1", "Hindi", "hi"),
    LanguageEntry::new("2", "Bengali", "bn"),
    LanguageEntry::new("3", "Tamil", "ta"),
    LanguageEntry::new("4", "Telugu", "te"),
    LanguageEntry::new("5", "Marathi", "mr"),
    LanguageEntry::new("6", "Gujarati", "gu"),
    LanguageEntry::new("7", "Kannada", "kn"),
    LanguageEntry::new("8", "Malayalam", "ml"),
    LanguageEntry::new("9", "Punjabi", "pa"),
    LanguageEntry::new("10", "Odia", "or"),
];

/// Returns every registered language in menu order.
pub const fn list() -> &'static [LanguageEntry] {
    INDIAN_LANGUAGES
}

/// Looks up a language by its menu key.
///
/// The key must match exactly; `None` means the user picked something that
/// is not on the menu.
pub fn lookup(key: &str) -> Option<&'static LanguageEntry> {
    INDIAN_LANGUAGES.iter().find(|entry| entry.key == key)
}

/// Looks up a language by its ISO 639-1 code (case-insensitive).
pub fn find_by_code(code: &str) -> Option<&'static LanguageEntry> {
    INDIAN_LANGUAGES
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
}

/// Resolves free-form user input to a language, accepting a menu key or a code.
pub fn resolve_choice(input: &str) -> Option<&'static LanguageEntry> {
    let input = input.trim();
    lookup(input).or_else(|| find_by_code(input))
}

/// Prints the registry as a table to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for entry in INDIAN_LANGUAGES {
        println!(
            "  {}  {} {}",
            Style::value(format!("{:>2}", entry.key)),
            Style::code(format!("{:3}", entry.code)),
            Style::secondary(entry.display_name)
        );
    }
}
