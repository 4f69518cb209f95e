use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::TranslateError;
use super::translator::CompletionBackend;

/// Gemini's OpenAI-compatible API base.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Completion backend speaking the OpenAI-compatible chat-completions API.
pub struct ChatCompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::BackendUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

impl CompletionBackend for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, TranslateError> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        tracing::debug!(%url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received chat completion response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::from_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

/// Extracts the reply text from a chat-completions response body.
///
/// Choices are alternative answers; the first one with content wins.
/// Returns `Ok(None)` when the body is well-formed but carries no content.
fn parse_completion(body: &str) -> Result<Option<String>, TranslateError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

    Ok(response
        .choices
        .into_iter()
        .filter_map(|c| c.message.and_then(|m| m.content))
        .find(|c| !c.is_empty()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> ChatCompletionClient {
        ChatCompletionClient::new(
            endpoint.to_string(),
            DEFAULT_MODEL.to_string(),
            "key".to_string(),
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    #[test]
    fn test_url_joins_endpoint() {
        assert_eq!(
            client(DEFAULT_ENDPOINT).url(),
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
        );
        assert_eq!(
            client("http://localhost:11434/v1/").url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gemini-2.5-flash",
            messages: [Message {
                role: "user",
                content: "Translate the following text to hi: Hello",
            }],
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gemini-2.5-flash");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(
            json["messages"][0]["content"],
            "Translate the following text to hi: Hello"
        );
    }

    #[test]
    fn test_parse_completion_with_content() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"नमस्ते"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), Some("नमस्ते".to_string()));
    }

    #[test]
    fn test_parse_completion_multiple_choices_takes_first() {
        let body =
            r#"{"choices":[{"message":{"content":"नमस्ते"}},{"message":{"content":"नमस्कार"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), Some("नमस्ते".to_string()));
    }

    #[test]
    fn test_parse_completion_skips_empty_choices() {
        let body = r#"{"choices":[{"message":{"content":null}},{"message":{"content":""}},{"message":{"content":"வணக்கம்"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), Some("வணக்கம்".to_string()));
    }

    #[test]
    fn test_parse_completion_null_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), None);
    }

    #[test]
    fn test_parse_completion_no_choices() {
        assert_eq!(parse_completion(r#"{"choices":[]}"#).unwrap(), None);
        assert_eq!(parse_completion("{}").unwrap(), None);
    }

    #[test]
    fn test_parse_completion_invalid_json() {
        let err = parse_completion("not json").unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }
}
