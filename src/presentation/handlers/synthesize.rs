use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::SynthesisRequest;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::dispatch::run_to_completion;
use super::error::ApiError;
use super::validation::{check_language, optional_name, required_text};

pub const SYNTHESIS_FAILED: &str = "Text-to-Speech failed";

#[tracing::instrument(skip(state, body))]
pub async fn synthesize_handler<R, T, S>(
    State(state): State<AppState<R, T, S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
    R: SpeechRecognizer + ?Sized + 'static,
    T: Translator + ?Sized + 'static,
    S: SpeechSynthesizer + ?Sized + 'static,
{
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let text = required_text(&body)?;
    let language = optional_name(&body, "langName");
    check_language(&state.registry, state.strict_languages, language.as_deref())?;

    tracing::debug!(text = %sanitize_for_log(&text), language = ?language, "Synthesizing speech");

    let request = SynthesisRequest::new(text, language);
    let service = Arc::clone(&state.synthesis_service);
    let result = run_to_completion(async move { service.synthesize(&request).await })
        .await
        .map_err(ApiError::service(SYNTHESIS_FAILED))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, result.mime_type)],
        result.audio,
    )
        .into_response())
}
