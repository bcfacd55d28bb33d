use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target_code`. A `None` source lets the backend auto-detect.
    async fn translate(
        &self,
        text: &str,
        source_code: Option<&str>,
        target_code: &str,
    ) -> Result<Vec<String>, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("credentials: {0}")]
    Credentials(String),
}
