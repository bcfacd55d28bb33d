use super::language_registry::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: Option<String>,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: Option<String>,
        target_language: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language,
            target_language: target_language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub target_language_code: String,
    pub source_language_code: Option<String>,
}
