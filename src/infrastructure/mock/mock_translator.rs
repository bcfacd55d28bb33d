use crate::application::ports::{Translator, TranslatorError};

/// Deterministic translator: prefixes the text with the target code.
pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_code: Option<&str>,
        target_code: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        Ok(vec![format!("[{}] {}", target_code, text)])
    }
}
