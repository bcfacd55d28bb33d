mod dispatch;
mod error;
mod health;
mod languages;
mod synthesize;
mod transcribe;
mod translate;
mod validation;

pub use error::{
    AUDIO_TOO_LARGE, ApiError, ErrorResponse, INVALID_TEXT, INVALID_UPLOAD, NO_AUDIO,
};
pub use health::health_handler;
pub use languages::languages_handler;
pub use synthesize::{SYNTHESIS_FAILED, synthesize_handler};
pub use transcribe::{TRANSCRIPTION_FAILED, TranscribeResponse, transcribe_handler};
pub use translate::{TRANSLATION_FAILED, TranslateResponse, translate_handler};
