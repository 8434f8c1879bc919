//! Request and response types for the TTS inference API.

use serde::{Deserialize, Serialize};

/// Language code understood by the synthesis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LangCode {
    /// `a` — American English
    #[serde(rename = "a")]
    AmericanEnglish,
    /// `b` — British English
    #[serde(rename = "b")]
    BritishEnglish,
    /// `f` — French
    #[serde(rename = "f")]
    French,
}

impl LangCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmericanEnglish => "a",
            Self::BritishEnglish => "b",
            Self::French => "f",
        }
    }

    /// Infer the language a voice id implies from its prefix.
    ///
    /// Voice ids follow the `<lang><style>_<name>` convention: `af_bella`
    /// implies American English, `bf_emma` British English, `ff_siwis`
    /// French. Returns `None` for ids outside that convention — the service
    /// accepts unknown prefixes, so callers should treat `None` as
    /// "no opinion", not as invalid.
    pub fn for_voice(voice: &str) -> Option<LangCode> {
        let prefix = voice.split_once('_')?.0;
        match prefix.chars().next()?.to_ascii_lowercase() {
            'a' => Some(Self::AmericanEnglish),
            'b' => Some(Self::BritishEnglish),
            'f' => Some(Self::French),
            _ => None,
        }
    }
}

impl Default for LangCode {
    fn default() -> Self {
        Self::AmericanEnglish
    }
}

impl std::fmt::Display for LangCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single synthesis request.
///
/// Serializes to the exact wire shape the service expects:
/// `{"text": ..., "lang": ..., "voice": ..., "speed": ...}`. The client does
/// not validate the fields; the service is the source of truth and rejects
/// out-of-range values with a 422.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub lang: LangCode,
    pub voice: String,
    pub speed: f64,
}

impl SynthesisRequest {
    /// New request with the service's defaults (`af_bella`, American
    /// English, speed 1.0).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: LangCode::default(),
            voice: "af_bella".to_string(),
            speed: 1.0,
        }
    }

    pub fn lang(mut self, lang: LangCode) -> Self {
        self.lang = lang;
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Playback-rate multiplier. The service clamps to its configured range
    /// (0.8–1.2 by default).
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

/// Synthesized audio plus the diagnostic headers the service attaches.
///
/// Every header is optional; a missing or unparseable header is `None`.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Raw audio bytes (WAV for the reference service).
    pub audio: Vec<u8>,
    /// `x-request-id` — service-side correlation id.
    pub request_id: Option<String>,
    /// `x-latency-ms` — server-measured synthesis latency.
    pub latency_ms: Option<u64>,
    /// `x-chars` — character count the service billed for the request.
    pub char_count: Option<u64>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub model_repo: String,
}
