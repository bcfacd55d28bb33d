use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechSynthesizer, SynthesizerError, VoiceSelection};
use crate::infrastructure::http::OutboundPolicy;

use super::GoogleCredentials;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com";

pub struct GoogleTtsClient {
    client: reqwest::Client,
    url: String,
    credentials: GoogleCredentials,
    policy: OutboundPolicy,
}

impl GoogleTtsClient {
    pub fn new(endpoint: &str, credentials: GoogleCredentials, policy: OutboundPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/v1/text:synthesize", endpoint.trim_end_matches('/')),
            credentials,
            policy,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceParams<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceParams<'a> {
    language_code: &'a str,
    ssml_gender: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
    ) -> Result<Vec<u8>, SynthesizerError> {
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceParams {
                language_code: &voice.language_code,
                ssml_gender: voice.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        tracing::debug!(locale = %voice.language_code, "Sending text to Google Text-to-Speech");

        let authorization = self
            .credentials
            .authorization()
            .await
            .map_err(|e| SynthesizerError::Credentials(e.to_string()))?;

        let response = self
            .policy
            .send(|| authorization.apply(self.client.post(&self.url)).json(&body))
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SynthesizerError::InvalidResponse(format!("parse response: {}", e)))?;

        general_purpose::STANDARD
            .decode(result.audio_content.as_bytes())
            .map_err(|e| SynthesizerError::DecodingFailed(format!("audio content: {}", e)))
    }
}
