#![allow(clippy::unwrap_used)]
//! Tests of the chat-completions client against a one-shot local HTTP stub.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bhasha_cli::translation::{
    ChatCompletionClient, CompletionBackend, TranslateError, Translator,
};

/// A request as seen by the stub server.
struct Captured {
    head: String,
    body: serde_json::Value,
}

/// Serves exactly one request with the given status and body.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head, body_start, content_length) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            raw.extend_from_slice(&chunk[..n]);

            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..pos]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                break (head, pos + 4, content_length);
            }
        };

        while raw.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending body");
            raw.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        Captured {
            head,
            body: serde_json::from_slice(&raw[body_start..body_start + content_length]).unwrap(),
        }
    });

    (endpoint, handle)
}

fn client(endpoint: String) -> ChatCompletionClient {
    ChatCompletionClient::new(
        endpoint,
        "test-model".to_string(),
        "secret-key".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_successful_completion() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"नमस्ते"}}]}"#,
    )
    .await;

    let translator = Translator::new(client(endpoint));
    let result = translator.translate("Hello", "hi").await.unwrap();

    assert_eq!(result, "नमस्ते");

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("POST /v1/chat/completions "));
    assert!(
        captured
            .head
            .to_ascii_lowercase()
            .contains("authorization: bearer secret-key")
    );
    assert_eq!(captured.body["model"], "test-model");
    assert_eq!(captured.body["stream"], false);
    assert_eq!(
        captured.body["messages"][0]["content"],
        "Translate the following text to hi: Hello"
    );
}

#[tokio::test]
async fn test_null_content_is_empty_response() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
    )
    .await;

    let translator = Translator::new(client(endpoint));
    let err = translator.translate("Hello", "hi").await.unwrap_err();

    assert!(matches!(err, TranslateError::EmptyResponse));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_is_authentication_failure() {
    let (endpoint, server) = serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"API key not valid"}}"#,
    )
    .await;

    let err = client(endpoint).complete("prompt").await.unwrap_err();

    assert!(matches!(
        err,
        TranslateError::AuthenticationFailed { status: 401 }
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let (endpoint, server) =
        serve_once("503 Service Unavailable", r#"{"error":"overloaded"}"#).await;

    let err = client(endpoint).complete("prompt").await.unwrap_err();

    let TranslateError::Backend { status, body } = err else {
        panic!("expected Backend error, got {err:?}");
    };
    assert_eq!(status, 503);
    assert!(body.contains("overloaded"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let (endpoint, server) = serve_once("200 OK", "<html>gateway</html>").await;

    let err = client(endpoint).complete("prompt").await.unwrap_err();

    assert!(matches!(err, TranslateError::MalformedResponse(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_refused_connection_is_unavailable() {
    // Bind then drop to get a local port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());
    drop(listener);

    let err = client(endpoint).complete("prompt").await.unwrap_err();

    assert!(matches!(err, TranslateError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_silent_backend_times_out_as_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());

    // Accept and read, but never answer.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut chunk = [0u8; 4096];
        while let Ok(n) = socket.read(&mut chunk).await {
            if n == 0 {
                break;
            }
        }
    });

    let client = ChatCompletionClient::new(
        endpoint,
        "test-model".to_string(),
        "secret-key".to_string(),
        Duration::from_millis(500),
    )
    .unwrap();

    let started = std::time::Instant::now();
    let err = client.complete("prompt").await.unwrap_err();

    assert!(
        matches!(err, TranslateError::BackendUnavailable(_)),
        "got {err:?}"
    );
    assert!(started.elapsed() < Duration::from_secs(5));
    server.abort();
}
