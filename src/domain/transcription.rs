use super::audio_encoding::AudioFormat;

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub format: AudioFormat,
    /// Accepted for compatibility; locale selection uses the configured pair.
    pub declared_language: Option<String>,
}

impl TranscriptionRequest {
    pub fn new(audio: Vec<u8>, format: AudioFormat) -> Self {
        Self {
            audio,
            format,
            declared_language: None,
        }
    }

    pub fn with_declared_language(mut self, language: Option<String>) -> Self {
        self.declared_language = language;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub locales_used: String,
}
