mod service_error;
mod synthesis_service;
mod transcription_service;
mod translation_service;

pub use service_error::ServiceError;
pub use synthesis_service::SynthesisService;
pub use transcription_service::{
    DEFAULT_ALTERNATIVE_LOCALE, DEFAULT_PRIMARY_LOCALE, LocalePair, TranscriptionService,
    join_top_alternatives,
};
pub use translation_service::TranslationService;
