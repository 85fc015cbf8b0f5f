use indicatif::ProgressBar;
use reqwest::blocking::Client;
use serde::de::{Deserialize, IgnoredAny};
use serde::Serialize;
use std::time::Duration;

use crate::error::{GcaiError, TransportError};

use super::{GenerateRequest, InferenceClient};

/// Synchronous Ollama client using /api/generate.
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    /// `timeout` of `None` waits for the server indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn post(&self, request: &GenerateRequest) -> Result<String, TransportError> {
        #[derive(Debug, Serialize)]
        struct GenerateBody<'a> {
            model: &'a str,
            stream: bool,
            system: &'a str,
            prompt: &'a str,
        }

        let req_body = GenerateBody {
            model: &request.model,
            stream: false,
            system: &request.system,
            prompt: &request.prompt,
        };

        let body_str = serde_json::to_string(&req_body)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        log::trace!("Ollama request body: {body_str}");

        let url = self.url();
        log::debug!("POST {url} (model {})", request.model);

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|source| TransportError::Send {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        let resp_text = resp.text().map_err(TransportError::ReadBody)?;

        log::trace!("Ollama raw response: {resp_text}");

        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body: resp_text,
            });
        }

        Ok(resp_text)
    }
}

impl InferenceClient for OllamaClient {
    fn generate(&self, request: &GenerateRequest) -> Result<String, GcaiError> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Waiting for {}...", request.model));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.post(request);
        spinner.finish_and_clear();

        let body = result?;
        ensure_json(&body)?;
        Ok(body)
    }
}

/// Check that the body is one syntactically valid JSON value, without
/// interpreting it. Nesting depth is not limited.
pub fn ensure_json(body: &str) -> Result<(), GcaiError> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();

    IgnoredAny::deserialize(&mut de)
        .and_then(|_| de.end())
        .map_err(|e| GcaiError::MalformedResponse {
            reason: e.to_string(),
            body: body.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const OLLAMA_REPLY: &str = r#"{"model":"llama3:latest","response":"{\"title\":\"Add x\",\"message\":\"Adds a line to x.\"}","done":true}"#;

    fn request() -> GenerateRequest {
        GenerateRequest::new("llama3:latest", "PROMPT")
    }

    // The blocking client owns its own runtime, so it must live on a blocking thread.
    async fn generate_against(uri: String, request: GenerateRequest) -> Result<String, GcaiError> {
        tokio::task::spawn_blocking(move || -> Result<String, GcaiError> {
            let client = OllamaClient::new(format!("{uri}/"), Some(Duration::from_secs(5)))?;
            client.generate(&request)
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn posts_generate_request_and_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "model": "llama3:latest",
                "stream": false,
                "system": "Act as a Linux server running a REST API. You reply with only valid JSON.",
                "prompt": "PROMPT",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(OLLAMA_REPLY))
            .expect(1)
            .mount(&server)
            .await;

        let body = generate_against(server.uri(), request()).await.unwrap();
        assert_eq!(body, OLLAMA_REPLY);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn truncated_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":"{\"title\""#))
            .mount(&server)
            .await;

        let err = generate_against(server.uri(), request()).await.unwrap_err();
        assert!(matches!(err, GcaiError::MalformedResponse { .. }), "{err:?}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error":"model 'nope' not found"}"#),
            )
            .mount(&server)
            .await;

        let err = generate_against(server.uri(), request()).await.unwrap_err();
        assert!(
            matches!(err, GcaiError::Transport(TransportError::Status { status: 404, .. })),
            "{err:?}"
        );
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let client = OllamaClient::new("http://127.0.0.1:1", Some(Duration::from_secs(2))).unwrap();
        let err = client.generate(&request()).unwrap_err();
        assert!(
            matches!(err, GcaiError::Transport(TransportError::Send { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn ensure_json_rejects_control_characters() {
        assert!(ensure_json("{\"title\":\"a\u{1}b\"}").is_err());
        assert!(ensure_json("").is_err());
        assert!(ensure_json(r#"{"title":"a","message":"b"}"#).is_ok());
    }

    #[test]
    fn ensure_json_accepts_deep_nesting() {
        let depth = 1000;
        let body = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(ensure_json(&body).is_ok());

        let unbalanced = format!("{}{}", "[".repeat(depth), "]".repeat(depth - 1));
        assert!(ensure_json(&unbalanced).is_err());
    }

    #[test]
    fn ensure_json_rejects_trailing_garbage() {
        assert!(ensure_json(r#"{"title":"a"} extra"#).is_err());
    }
}
