use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::infrastructure::http::OutboundPolicy;

use super::GoogleCredentials;

pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com";
pub const DEFAULT_LOCATION: &str = "global";

/// Cloud Translation v3 `translateText` client scoped to one project and location.
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    url: String,
    credentials: GoogleCredentials,
    policy: OutboundPolicy,
}

impl GoogleTranslateClient {
    pub fn new(
        endpoint: &str,
        project_id: &str,
        location: &str,
        credentials: GoogleCredentials,
        policy: OutboundPolicy,
    ) -> Self {
        let url = format!(
            "{}/v3/projects/{}/locations/{}:translateText",
            endpoint.trim_end_matches('/'),
            project_id,
            location,
        );
        Self {
            client: reqwest::Client::new(),
            url,
            credentials,
            policy,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextRequest<'a> {
    contents: [&'a str; 1],
    mime_type: &'static str,
    target_language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language_code: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    #[serde(default)]
    translated_text: String,
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_code: Option<&str>,
        target_code: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        let body = TranslateTextRequest {
            contents: [text],
            mime_type: "text/plain",
            target_language_code: target_code,
            source_language_code: source_code,
        };

        tracing::debug!(
            target_code = target_code,
            source_code = ?source_code,
            "Sending text to Google Translation"
        );

        let authorization = self
            .credentials
            .authorization()
            .await
            .map_err(|e| TranslatorError::Credentials(e.to_string()))?;

        let response = self
            .policy
            .send(|| authorization.apply(self.client.post(&self.url)).json(&body))
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslatorError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: TranslateTextResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(format!("parse response: {}", e)))?;

        Ok(result
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect())
    }
}
