use crate::application::ports::{RecognizerError, SynthesizerError, TranslatorError};

/// A downstream failure. The message is for local diagnostics only and must
/// never be echoed to callers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("transcription: {0}")]
    Transcription(#[from] RecognizerError),
    #[error("translation: {0}")]
    Translation(#[from] TranslatorError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesizerError),
    #[error("task aborted: {0}")]
    Aborted(String),
}
