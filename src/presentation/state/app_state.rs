use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::application::services::{
    LocalePair, SynthesisService, TranscriptionService, TranslationService,
};
use crate::domain::{AudioFormat, LanguageRegistry};

/// Gateway behaviour chosen at startup.
#[derive(Debug, Clone, Default)]
pub struct GatewayOptions {
    pub locales: LocalePair,
    pub audio_format: AudioFormat,
    pub strict_languages: bool,
}

pub struct AppState<R, T, S>
where
    R: SpeechRecognizer + ?Sized,
    T: Translator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub transcription_service: Arc<TranscriptionService<R>>,
    pub translation_service: Arc<TranslationService<T>>,
    pub synthesis_service: Arc<SynthesisService<S>>,
    pub registry: Arc<LanguageRegistry>,
    pub audio_format: AudioFormat,
    pub strict_languages: bool,
}

impl<R, T, S> AppState<R, T, S>
where
    R: SpeechRecognizer + ?Sized,
    T: Translator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub fn new(
        recognizer: Arc<R>,
        translator: Arc<T>,
        synthesizer: Arc<S>,
        options: GatewayOptions,
    ) -> Self {
        let registry = Arc::new(LanguageRegistry::new());

        Self {
            transcription_service: Arc::new(TranscriptionService::new(
                recognizer,
                options.locales,
            )),
            translation_service: Arc::new(TranslationService::new(
                translator,
                Arc::clone(&registry),
            )),
            synthesis_service: Arc::new(SynthesisService::new(
                synthesizer,
                Arc::clone(&registry),
            )),
            registry,
            audio_format: options.audio_format,
            strict_languages: options.strict_languages,
        }
    }
}

impl<R, T, S> Clone for AppState<R, T, S>
where
    R: SpeechRecognizer + ?Sized,
    T: Translator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            translation_service: Arc::clone(&self.translation_service),
            synthesis_service: Arc::clone(&self.synthesis_service),
            registry: Arc::clone(&self.registry),
            audio_format: self.audio_format,
            strict_languages: self.strict_languages,
        }
    }
}
