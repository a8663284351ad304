//! Google Web Speech API client.
//!
//! Posts raw L16 PCM to the v2 `recognize` endpoint and parses the
//! line-delimited JSON it streams back. The first line is usually an empty
//! `{"result":[]}` placeholder; the transcript, when there is one, arrives
//! as the first alternative of a later result.

use crate::defaults::{
    self, DEFAULT_API_KEY, DEFAULT_LANGUAGE, RECOGNIZE_ENDPOINT, REQUEST_TIMEOUT_SECS,
};
use crate::error::{Result, ScribeError};
use crate::recognize::{Recognition, Recognizer};
use serde::Deserialize;
use std::time::Duration;

/// Configuration for the Web Speech client.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleConfig {
    pub endpoint: String,
    /// BCP-47 language tag, e.g. `en-US`.
    pub language: String,
    pub api_key: String,
    /// Request timeout in seconds; 0 disables the timeout.
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            endpoint: RECOGNIZE_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Recognizer backed by the Google Web Speech API.
pub struct GoogleRecognizer {
    client: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleRecognizer {
    pub fn new(config: GoogleConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ScribeError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn request_url(&self) -> String {
        format!(
            "{}?client=chromium&lang={}&key={}",
            self.config.endpoint, self.config.language, self.config.api_key
        )
    }
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    #[serde(default)]
    result: Vec<SpeechResult>,
}

#[derive(Debug, Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternative: Vec<SpeechAlternative>,
}

#[derive(Debug, Deserialize)]
struct SpeechAlternative {
    transcript: Option<String>,
}

/// Parse the line-delimited JSON body into an outcome.
///
/// No usable alternative on any line means the audio was unintelligible.
fn parse_body(body: &str) -> Recognition {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(response) = serde_json::from_str::<SpeechResponse>(line) else {
            continue;
        };
        for result in response.result {
            if let Some(alternative) = result.alternative.into_iter().next()
                && let Some(transcript) = alternative.transcript
                && !transcript.is_empty()
            {
                return Recognition::Text(transcript);
            }
        }
    }
    Recognition::Unintelligible
}

/// Serialize samples as little-endian L16 bytes.
fn l16_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}

#[async_trait::async_trait]
impl Recognizer for GoogleRecognizer {
    async fn recognize(&self, samples: &[i16]) -> Recognition {
        let response = match self
            .client
            .post(self.request_url())
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("audio/l16; rate={}", defaults::SAMPLE_RATE),
            )
            .body(l16_bytes(samples))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return Recognition::Failed(e.to_string()),
        };

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            return Recognition::Failed(if detail.is_empty() {
                format!("recognition request failed: {status}")
            } else {
                format!("recognition request failed: {status}: {detail}")
            });
        }

        match response.text().await {
            Ok(body) => parse_body(&body),
            Err(e) => Recognition::Failed(format!("failed to read response: {e}")),
        }
    }
}
