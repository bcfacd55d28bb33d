use std::sync::Arc;

use crate::application::ports::Translator;
use crate::domain::{LanguageRegistry, TranslationRequest, TranslationResult};

use super::ServiceError;

pub struct TranslationService<T>
where
    T: Translator + ?Sized,
{
    translator: Arc<T>,
    registry: Arc<LanguageRegistry>,
}

impl<T> TranslationService<T>
where
    T: Translator + ?Sized,
{
    pub fn new(translator: Arc<T>, registry: Arc<LanguageRegistry>) -> Self {
        Self {
            translator,
            registry,
        }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ServiceError> {
        let target = self.registry.resolve(&request.target_language).translate_code;
        let source = request
            .source_language
            .as_deref()
            .map(|name| self.registry.resolve(name).translate_code);

        tracing::debug!(target_code = target, source_code = ?source, "Resolved translation codes");

        let translations = self
            .translator
            .translate(&request.text, source, target)
            .await?;

        let translated_text = translations.into_iter().next().unwrap_or_default();

        tracing::info!(
            target_code = target,
            chars = translated_text.chars().count(),
            "Translation completed"
        );

        Ok(TranslationResult {
            translated_text,
            target_language_code: target.to_string(),
            source_language_code: source.map(str::to_string),
        })
    }
}
