use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::infrastructure::google::{
    CredentialsError, GoogleClientConfig, GoogleCredentials, GoogleSpeechClient,
    GoogleTranslateClient, GoogleTtsClient,
};
use crate::infrastructure::http::OutboundPolicy;
use crate::infrastructure::mock::{MockSpeechRecognizer, MockSpeechSynthesizer, MockTranslator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechProvider {
    Google,
    Mock,
}

/// The three external-service handles, built once and shared by every request.
#[derive(Clone)]
pub struct SpeechBackends {
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

pub struct SpeechBackendFactory;

impl SpeechBackendFactory {
    pub fn create(
        provider: SpeechProvider,
        config: &GoogleClientConfig,
    ) -> Result<SpeechBackends, CredentialsError> {
        match provider {
            SpeechProvider::Mock => {
                tracing::warn!("Using mock speech backends");
                Ok(SpeechBackends {
                    recognizer: Arc::new(MockSpeechRecognizer::default()),
                    translator: Arc::new(MockTranslator),
                    synthesizer: Arc::new(MockSpeechSynthesizer),
                })
            }
            SpeechProvider::Google => {
                let shared = load(
                    config.translation_credentials.as_ref(),
                    "translation/synthesis credentials",
                    config.policy,
                )?;
                let speech = load(
                    config.speech_credentials.as_ref(),
                    "transcription credentials",
                    config.policy,
                )?;

                tracing::info!(
                    project_id = %config.project_id,
                    location = %config.location,
                    timeout_ms = ?config.policy.timeout.map(|t| t.as_millis()),
                    retry_once = config.policy.retry_once,
                    "Google speech backends configured"
                );

                Ok(SpeechBackends {
                    recognizer: Arc::new(GoogleSpeechClient::new(
                        &config.speech_endpoint,
                        speech,
                        config.policy,
                    )),
                    translator: Arc::new(GoogleTranslateClient::new(
                        &config.translate_endpoint,
                        &config.project_id,
                        &config.location,
                        shared.clone(),
                        config.policy,
                    )),
                    synthesizer: Arc::new(GoogleTtsClient::new(
                        &config.tts_endpoint,
                        shared,
                        config.policy,
                    )),
                })
            }
        }
    }
}

fn load(
    path: Option<&PathBuf>,
    what: &'static str,
    policy: OutboundPolicy,
) -> Result<GoogleCredentials, CredentialsError> {
    let path = path.ok_or(CredentialsError::NotConfigured(what))?;
    GoogleCredentials::from_file(path, policy)
}
