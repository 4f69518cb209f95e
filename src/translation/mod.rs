mod client;
mod error;
mod language;
mod prompt;
mod translator;

pub use client::{ChatCompletionClient, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use error::TranslateError;
pub use language::{
    INDIAN_LANGUAGES, LanguageEntry, find_by_code, list, lookup, print_languages, resolve_choice,
};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
pub use translator::{CompletionBackend, TranslationRequest, Translator};
