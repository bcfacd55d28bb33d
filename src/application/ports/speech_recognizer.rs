use async_trait::async_trait;

use crate::domain::AudioEncoding;

/// Locale and format parameters sent with a single recognition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub alternative_language_codes: Vec<String>,
}

impl RecognitionConfig {
    /// Primary and alternative locales joined by `|`, e.g. `en-US|es-ES`.
    pub fn locales_label(&self) -> String {
        std::iter::once(self.language_code.as_str())
            .chain(self.alternative_language_codes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// One recognized stretch of audio with its ranked candidate transcripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedSegment {
    pub alternatives: Vec<String>,
}

impl RecognizedSegment {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }

    pub fn top(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        config: &RecognitionConfig,
        audio: &[u8],
    ) -> Result<Vec<RecognizedSegment>, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("credentials: {0}")]
    Credentials(String),
}
