pub const PROMPT_TEMPLATE: &str = "Translate the following text to {target_language}: {text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(target_language: &str, text: &str) -> String {
    // Placeholders are for string replacement, not format arguments.
    // Language goes first so braces inside user text are never expanded.
    PROMPT_TEMPLATE
        .replacen("{target_language}", target_language, 1)
        .replacen("{text}", text, 1)
}
