use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    RecognitionConfig, RecognizedSegment, RecognizerError, SpeechRecognizer,
};
use crate::infrastructure::http::OutboundPolicy;

use super::GoogleCredentials;

pub const DEFAULT_SPEECH_ENDPOINT: &str = "https://speech.googleapis.com";

/// Batch recognizer backed by the Cloud Speech-to-Text `speech:recognize` REST call.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    url: String,
    credentials: GoogleCredentials,
    policy: OutboundPolicy,
}

impl GoogleSpeechClient {
    pub fn new(endpoint: &str, credentials: GoogleCredentials, policy: OutboundPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/v1/speech:recognize", endpoint.trim_end_matches('/')),
            credentials,
            policy,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognizeConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    alternative_language_codes: &'a [String],
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize, Default)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(
        &self,
        config: &RecognitionConfig,
        audio: &[u8],
    ) -> Result<Vec<RecognizedSegment>, RecognizerError> {
        let body = RecognizeRequest {
            config: RecognizeConfig {
                encoding: config.encoding.as_str(),
                sample_rate_hertz: config.sample_rate_hertz,
                language_code: &config.language_code,
                alternative_language_codes: &config.alternative_language_codes,
            },
            audio: RecognitionAudio {
                content: general_purpose::STANDARD.encode(audio),
            },
        };

        tracing::debug!(
            bytes = audio.len(),
            locales = %config.locales_label(),
            "Sending audio to Google Speech-to-Text"
        );

        let authorization = self
            .credentials
            .authorization()
            .await
            .map_err(|e| RecognizerError::Credentials(e.to_string()))?;

        let response = self
            .policy
            .send(|| authorization.apply(self.client.post(&self.url)).json(&body))
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(format!("parse response: {}", e)))?;

        Ok(result
            .results
            .into_iter()
            .map(|r| {
                RecognizedSegment::new(r.alternatives.into_iter().map(|a| a.transcript).collect())
            })
            .collect())
    }
}
