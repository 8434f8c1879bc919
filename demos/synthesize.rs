//! Synthesize a phrase against a running service and write the WAV to disk.
//!
//! Usage: `TTS_BASE_URL=http://127.0.0.1:8000 cargo run --example synthesize`

use anyhow::Result;
use kokoro_tts_client::{LangCode, SynthesisRequest, TtsClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = TtsClient::builder().build()?;

    let health = client.health().await?;
    println!("service {} is {} ({})", health.service, health.status, health.model_repo);

    let request = SynthesisRequest::new("The quick brown fox jumps over the lazy dog.")
        .voice("af_bella")
        .lang(LangCode::AmericanEnglish)
        .speed(1.0);

    let result = client.synthesize(&request).await?;
    std::fs::write("synthesis.wav", &result.audio)?;
    println!(
        "wrote {} bytes to synthesis.wav (request {}, latency {} ms)",
        result.audio.len(),
        result.request_id.as_deref().unwrap_or("?"),
        result
            .latency_ms
            .map(|ms| ms.to_string())
            .unwrap_or_else(|| "?".to_string()),
    );
    Ok(())
}
