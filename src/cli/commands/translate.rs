use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::{InputError, InputReader};
use crate::translation::{
    ChatCompletionClient, CompletionBackend, LanguageEntry, Translator, list, lookup,
    resolve_choice,
};
use crate::ui::{Spinner, Style};

pub const MENU_HEADER: &str = "Choose a language to translate from English:";
pub const CHOICE_PROMPT: &str = "Enter the number corresponding to your choice: ";
pub const TEXT_PROMPT: &str = "Enter the text to translate: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please restart and select a valid option.";

pub struct TranslateOptions {
    pub text: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Answers supplied up front instead of being prompted for.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    /// Menu key or language code.
    pub to: Option<String>,
    pub text: Option<String>,
}

/// How a single-pass session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Translated {
        language: &'static LanguageEntry,
        translation: String,
    },
    /// The selection did not match any language; nothing was sent.
    InvalidChoice(String),
}

/// Loads configuration, builds the HTTP backend and runs one session on stdin/stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<SessionOutcome> {
    let config_file = ConfigManager::new()?.load()?;

    let resolve_options = ResolveOptions {
        endpoint: options.endpoint,
        model: options.model,
        timeout_secs: options.timeout_secs,
    };
    let config = resolve_config(&resolve_options, &config_file)?;
    tracing::debug!(?config, "resolved configuration");

    let client =
        ChatCompletionClient::new(config.endpoint, config.model, config.api_key, config.timeout)?;
    let translator = Translator::new(client);

    let preset = Preset {
        to: options.to,
        text: options.text,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_session(&mut input, &mut output, &translator, preset).await
}

/// Runs one menu → choice → text → translate → print pass.
///
/// An unknown selection prints [`INVALID_CHOICE`] and returns without
/// contacting the backend.
pub async fn run_session<R, W, B>(
    input: &mut R,
    output: &mut W,
    translator: &Translator<B>,
    preset: Preset,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    B: CompletionBackend,
{
    let (choice, language) = if let Some(to) = preset.to {
        let language = resolve_choice(&to);
        if language.is_none() {
            crate::status!(
                "{}",
                Style::hint("Run 'bhasha languages' to see the accepted keys and codes.")
            );
        }
        (to, language)
    } else {
        print_menu(output)?;
        let choice = InputReader::prompt_line(input, output, CHOICE_PROMPT)?;
        let language = lookup(choice.trim());
        (choice, language)
    };

    let Some(language) = language else {
        writeln!(output, "{INVALID_CHOICE}")?;
        return Ok(SessionOutcome::InvalidChoice(choice));
    };

    let text = match preset.text {
        Some(text) => text,
        None => InputReader::prompt_line(input, output, TEXT_PROMPT)?,
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty.into());
    }

    let spinner = Spinner::new(&format!("Translating to {}...", language.display_name));
    let result = translator.translate(&text, language.code).await;
    spinner.stop();

    let translation = result?;

    writeln!(
        output,
        "Translated Text in {}: {}",
        language.display_name, translation
    )?;
    output.flush()?;

    Ok(SessionOutcome::Translated {
        language,
        translation,
    })
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", Style::header(MENU_HEADER))?;
    for entry in list() {
        writeln!(output, "{}. {}", entry.key, entry.display_name)?;
    }
    Ok(())
}
