//! # kokoro-tts-client
//!
//! Async Rust client for the Kokoro TTS inference API.
//!
//! ## Overview
//!
//! This library wraps the inference service's HTTP surface: it serializes a
//! [`SynthesisRequest`] to JSON, posts it to `{base_url}/tts`, and maps the
//! response into a [`SynthesisResult`] — the synthesized audio bytes plus the
//! diagnostic headers the service attaches (`x-request-id`, `x-latency-ms`,
//! `x-chars`). Each header is optional on the wire and stays optional in the
//! result: absence means `None`, never a placeholder value.
//!
//! ## Key Features
//!
//! - **Typed client**: [`TtsClient`] with a builder that resolves its
//!   configuration from explicit values or `TTS_`-prefixed environment
//!   variables
//! - **Two failure kinds**: transport failures (no response) and service
//!   failures (non-2xx with a best-effort message extracted from the body)
//!   are distinct [`Error`] variants
//! - **Preview and health**: the service's `GET /tts/preview` and
//!   `GET /health` endpoints are exposed alongside `POST /tts`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kokoro_tts_client::{LangCode, SynthesisRequest, TtsClient};
//!
//! #[tokio::main]
//! async fn main() -> kokoro_tts_client::Result<()> {
//!     let client = TtsClient::builder()
//!         .base_url("http://127.0.0.1:8000")
//!         .build()?;
//!
//!     let request = SynthesisRequest::new("Hello from Kokoro")
//!         .voice("af_bella")
//!         .lang(LangCode::AmericanEnglish)
//!         .speed(1.0);
//!
//!     let result = client.synthesize(&request).await?;
//!     println!("{} bytes of audio", result.audio.len());
//!     Ok(())
//! }
//! ```
//!
//! Each call issues exactly one outbound request. There is no retry, caching,
//! or queueing layer; calls share nothing but the connection pool, so any
//! number may be in flight concurrently.

pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::{TtsClient, TtsClientBuilder};
pub use types::{HealthStatus, LangCode, SynthesisRequest, SynthesisResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
