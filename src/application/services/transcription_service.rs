use std::sync::Arc;

use crate::application::ports::{RecognitionConfig, RecognizedSegment, SpeechRecognizer};
use crate::domain::{TranscriptionRequest, TranscriptionResult};

use super::ServiceError;

pub const DEFAULT_PRIMARY_LOCALE: &str = "en-US";
pub const DEFAULT_ALTERNATIVE_LOCALE: &str = "es-ES";

/// Primary/alternative locale pair the recognizer runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePair {
    pub primary: String,
    pub alternatives: Vec<String>,
}

impl Default for LocalePair {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_LOCALE.to_string(),
            alternatives: vec![DEFAULT_ALTERNATIVE_LOCALE.to_string()],
        }
    }
}

pub struct TranscriptionService<R>
where
    R: SpeechRecognizer + ?Sized,
{
    recognizer: Arc<R>,
    locales: LocalePair,
}

impl<R> TranscriptionService<R>
where
    R: SpeechRecognizer + ?Sized,
{
    pub fn new(recognizer: Arc<R>, locales: LocalePair) -> Self {
        Self {
            recognizer,
            locales,
        }
    }

    pub async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, ServiceError> {
        if let Some(declared) = request.declared_language.as_deref() {
            tracing::debug!(
                declared_language = %declared,
                "Declared language does not affect recognizer locales"
            );
        }

        let config = RecognitionConfig {
            encoding: request.format.encoding,
            sample_rate_hertz: request.format.sample_rate_hertz,
            language_code: self.locales.primary.clone(),
            alternative_language_codes: self.locales.alternatives.clone(),
        };

        let segments = self.recognizer.recognize(&config, &request.audio).await?;
        let transcript = join_top_alternatives(&segments);

        tracing::info!(
            segments = segments.len(),
            chars = transcript.chars().count(),
            "Transcription completed"
        );

        Ok(TranscriptionResult {
            transcript,
            locales_used: config.locales_label(),
        })
    }
}

/// Space-joins the best candidate of every segment that has one.
pub fn join_top_alternatives(segments: &[RecognizedSegment]) -> String {
    segments
        .iter()
        .filter_map(RecognizedSegment::top)
        .collect::<Vec<_>>()
        .join(" ")
}

