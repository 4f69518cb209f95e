use thiserror::Error;

/// Failure modes of a single translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The backend answered but produced no usable text.
    #[error("Translation failed.")]
    EmptyResponse,

    /// The backend could not be reached or did not answer in time.
    #[error("Translation backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend rejected the credential.
    #[error("Authentication with the translation backend failed (HTTP {status})\n\nCheck that your API key is valid.")]
    AuthenticationFailed { status: u16 },

    /// The backend returned a non-success status other than an auth failure.
    #[error("Translation backend returned HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    /// The backend reply could not be decoded.
    #[error("Malformed response from translation backend: {0}")]
    MalformedResponse(String),

    /// The request could not be built, usually because of a bad endpoint URL.
    #[error("Invalid translation backend request: {0}\n\nCheck the configured endpoint.")]
    InvalidRequest(String),
}

impl TranslateError {
    /// Maps an unsuccessful HTTP status to the matching error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed { status },
            _ => Self::Backend { status, body },
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), err.to_string())
        } else {
            // Connect failures, timeouts and dropped connections.
            Self::BackendUnavailable(err.to_string())
        }
    }
}
