use async_trait::async_trait;

/// SSML gender sent with every synthesis request.
pub const NEUTRAL_GENDER: &str = "NEUTRAL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: String,
    pub ssml_gender: &'static str,
}

impl VoiceSelection {
    pub fn neutral(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            ssml_gender: NEUTRAL_GENDER,
        }
    }
}

/// Renders text to MP3 audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
    ) -> Result<Vec<u8>, SynthesizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("credentials: {0}")]
    Credentials(String),
}
