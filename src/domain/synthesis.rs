use super::language_registry::DEFAULT_LANGUAGE;

pub const MP3_MIME_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, language: Option<String>) -> Self {
        Self {
            text: text.into(),
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    pub audio: Vec<u8>,
    pub mime_type: &'static str,
}

impl SynthesisResult {
    pub fn mp3(audio: Vec<u8>) -> Self {
        Self {
            audio,
            mime_type: MP3_MIME_TYPE,
        }
    }
}
