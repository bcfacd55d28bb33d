mod audio_encoding;
mod language_profile;
mod language_registry;
mod synthesis;
mod transcription;
mod translation;

pub use audio_encoding::{AudioEncoding, AudioFormat, DEFAULT_SAMPLE_RATE_HERTZ};
pub use language_profile::LanguageProfile;
pub use language_registry::{DEFAULT_LANGUAGE, LanguageRegistry};
pub use synthesis::{MP3_MIME_TYPE, SynthesisRequest, SynthesisResult};
pub use transcription::{TranscriptionRequest, TranscriptionResult};
pub use translation::{TranslationRequest, TranslationResult};
