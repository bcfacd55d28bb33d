use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::TranslationRequest;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::dispatch::run_to_completion;
use super::error::ApiError;
use super::validation::{check_language, optional_name, required_text};

pub const TRANSLATION_FAILED: &str = "Translate failed";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub target_language_code: String,
    pub source_language_code: Option<String>,
}

#[tracing::instrument(skip(state, body))]
pub async fn translate_handler<R, T, S>(
    State(state): State<AppState<R, T, S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError>
where
    R: SpeechRecognizer + ?Sized + 'static,
    T: Translator + ?Sized + 'static,
    S: SpeechSynthesizer + ?Sized + 'static,
{
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let text = required_text(&body)?;
    let target = optional_name(&body, "targetLangName");
    let source = optional_name(&body, "sourceLangName");
    check_language(&state.registry, state.strict_languages, target.as_deref())?;
    check_language(&state.registry, state.strict_languages, source.as_deref())?;

    tracing::debug!(
        text = %sanitize_for_log(&text),
        target_language = ?target,
        source_language = ?source,
        "Translating text"
    );

    let request = TranslationRequest::new(text, source, target);
    let service = Arc::clone(&state.translation_service);
    let result = run_to_completion(async move { service.translate(&request).await })
        .await
        .map_err(ApiError::service(TRANSLATION_FAILED))?;

    Ok(Json(TranslateResponse {
        translated_text: result.translated_text,
        target_language_code: result.target_language_code,
        source_language_code: result.source_language_code,
    }))
}
