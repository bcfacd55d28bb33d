use std::path::PathBuf;

use crate::infrastructure::http::OutboundPolicy;

use super::{DEFAULT_LOCATION, DEFAULT_SPEECH_ENDPOINT, DEFAULT_TRANSLATE_ENDPOINT, DEFAULT_TTS_ENDPOINT};

/// Everything needed to build the three Google clients.
///
/// Translation and synthesis share one credentials location; transcription
/// has its own.
#[derive(Debug, Clone)]
pub struct GoogleClientConfig {
    pub project_id: String,
    pub location: String,
    pub speech_endpoint: String,
    pub translate_endpoint: String,
    pub tts_endpoint: String,
    pub translation_credentials: Option<PathBuf>,
    pub speech_credentials: Option<PathBuf>,
    pub policy: OutboundPolicy,
}

impl GoogleClientConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            location: DEFAULT_LOCATION.to_string(),
            speech_endpoint: DEFAULT_SPEECH_ENDPOINT.to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            tts_endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            translation_credentials: None,
            speech_credentials: None,
            policy: OutboundPolicy::default(),
        }
    }
}
