//! TTS inference API client.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tracing::{info, warn};

use crate::types::{HealthStatus, SynthesisRequest, SynthesisResult};
use crate::{Error, Result};

/// Development default; the real deployment sets `TTS_BASE_URL`.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const HEADER_REQUEST_ID: &str = "x-request-id";
const HEADER_LATENCY_MS: &str = "x-latency-ms";
const HEADER_CHARS: &str = "x-chars";

/// Client for the TTS inference service.
///
/// Cheap to clone (clones share the underlying connection pool). Calls are
/// fully independent; any number may be in flight concurrently.
#[derive(Clone)]
pub struct TtsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Synthesize speech for `request`.
    ///
    /// Issues exactly one `POST {base_url}/tts` and awaits the full
    /// response. A non-2xx status becomes [`Error::Service`] with a message
    /// extracted from the body (JSON `detail` field, then raw text, then a
    /// generic status line); a network-level failure becomes
    /// [`Error::Transport`].
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let response = self
            .http_client
            .post(format!("{}/tts", self.base_url))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;
        self.read_audio_response(response).await
    }

    /// Synthesize via the service's `GET /tts/preview` convenience endpoint.
    ///
    /// Same request fields and same response contract as [`synthesize`],
    /// carried as query parameters instead of a JSON body.
    ///
    /// [`synthesize`]: Self::synthesize
    pub async fn preview(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let speed = request.speed.to_string();
        let response = self
            .http_client
            .get(format!("{}/tts/preview", self.base_url))
            .query(&[
                ("text", request.text.as_str()),
                ("lang", request.lang.as_str()),
                ("voice", request.voice.as_str()),
                ("speed", speed.as_str()),
            ])
            .send()
            .await?;
        self.read_audio_response(response).await
    }

    /// Service liveness and model info.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .http_client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(self.service_error(status, response).await);
        }
        Ok(response.json().await?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_audio_response(&self, response: reqwest::Response) -> Result<SynthesisResult> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.service_error(status, response).await);
        }

        let headers = response.headers().clone();
        let audio = response.bytes().await?.to_vec();

        let request_id = header_str(&headers, HEADER_REQUEST_ID);
        let latency_ms = header_u64(&headers, HEADER_LATENCY_MS);
        let char_count = header_u64(&headers, HEADER_CHARS);

        info!(
            http_status = status.as_u16(),
            request_id = request_id.as_deref().unwrap_or("-"),
            latency_ms,
            bytes = audio.len(),
            "tts synthesis completed"
        );

        Ok(SynthesisResult {
            audio,
            request_id,
            latency_ms,
            char_count,
        })
    }

    async fn service_error(&self, status: StatusCode, response: reqwest::Response) -> Error {
        // The HTTP failure is the primary signal; a body that cannot be read
        // must not replace it with a transport error.
        let message = match response.bytes().await {
            Ok(body) => error_message(status, &body),
            Err(_) => generic_message(status),
        };
        warn!(
            http_status = status.as_u16(),
            error = message.as_str(),
            "tts request failed"
        );
        Error::service(status.as_u16(), message)
    }
}

/// Best-effort failure message, in priority order: JSON `detail` field,
/// non-empty body text, generic status line.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail") {
            return match detail.as_str() {
                Some(s) => s.to_string(),
                None => detail.to_string(),
            };
        }
    }
    match std::str::from_utf8(body) {
        Ok(text) if !text.is_empty() => text.to_string(),
        _ => generic_message(status),
    }
}

fn generic_message(status: StatusCode) -> String {
    format!("Request failed ({})", status.as_u16())
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

pub struct TtsClientBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout_secs: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("TTS_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let timeout_secs = self
            .timeout_secs
            .or_else(|| {
                std::env::var("TTS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(TtsClient {
            http_client,
            base_url,
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detail_wins() {
        let msg = error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"detail": "voice not found"}"#,
        );
        assert_eq!(msg, "voice not found");
    }

    #[test]
    fn non_string_detail_uses_its_json_form() {
        let msg = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail": {"loc": ["speed"]}}"#,
        );
        assert_eq!(msg, r#"{"loc":["speed"]}"#);
    }

    #[test]
    fn json_without_detail_falls_back_to_text() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error": "nope"}"#);
        assert_eq!(msg, r#"{"error": "nope"}"#);
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, b"internal error");
        assert_eq!(msg, "internal error");
    }

    #[test]
    fn empty_body_yields_generic_message() {
        let msg = error_message(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(msg, "Request failed (503)");
    }

    #[test]
    fn invalid_utf8_body_yields_generic_message() {
        let msg = error_message(StatusCode::BAD_GATEWAY, &[0xff, 0xfe, 0xfd]);
        assert_eq!(msg, "Request failed (502)");
    }

    #[test]
    fn builder_trims_trailing_slash_and_rejects_garbage() {
        let client = TtsClientBuilder::new()
            .base_url("http://localhost:8000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");

        let err = TtsClientBuilder::new().base_url("not a url").build();
        assert!(matches!(err, Err(Error::Configuration(_))));
    }
}
