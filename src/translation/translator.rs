use super::error::TranslateError;
use super::prompt::build_prompt;

/// A text-completion service that turns a prompt into a reply.
///
/// `Ok(None)` means the service answered without any content.
pub trait CompletionBackend {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>, TranslateError>> + Send;
}

/// A single translation: source text plus target language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_language: target_language.into(),
        }
    }

    pub fn prompt(&self) -> String {
        build_prompt(&self.target_language, &self.source_text)
    }
}

/// Translates English text by prompting a completion backend.
pub struct Translator<B> {
    backend: B,
}

impl<B: CompletionBackend> Translator<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Translates `text` into the language identified by `target_code`.
    ///
    /// The reply is returned verbatim. A reply with no visible text is an
    /// [`TranslateError::EmptyResponse`].
    pub async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslateError> {
        self.translate_request(&TranslationRequest::new(text, target_code))
            .await
    }

    pub async fn translate_request(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslateError> {
        tracing::debug!(
            target_language = %request.target_language,
            chars = request.source_text.chars().count(),
            "submitting translation prompt"
        );

        match self.backend.complete(&request.prompt()).await? {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => {
                tracing::debug!("backend returned no content");
                Err(TranslateError::EmptyResponse)
            }
        }
    }
}
