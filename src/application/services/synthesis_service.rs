use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, VoiceSelection};
use crate::domain::{LanguageRegistry, SynthesisRequest, SynthesisResult};

use super::ServiceError;

pub struct SynthesisService<S>
where
    S: SpeechSynthesizer + ?Sized,
{
    synthesizer: Arc<S>,
    registry: Arc<LanguageRegistry>,
}

impl<S> SynthesisService<S>
where
    S: SpeechSynthesizer + ?Sized,
{
    pub fn new(synthesizer: Arc<S>, registry: Arc<LanguageRegistry>) -> Self {
        Self {
            synthesizer,
            registry,
        }
    }

    pub async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResult, ServiceError> {
        let voice = VoiceSelection::neutral(self.registry.resolve(&request.language).tts_locale);

        let audio = self.synthesizer.synthesize(&request.text, &voice).await?;

        tracing::info!(
            locale = %voice.language_code,
            bytes = audio.len(),
            "Synthesis completed"
        );

        Ok(SynthesisResult::mp3(audio))
    }
}
