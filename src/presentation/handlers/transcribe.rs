use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::TranscriptionRequest;
use crate::presentation::state::AppState;

use super::dispatch::run_to_completion;
use super::error::{ApiError, INVALID_UPLOAD, NO_AUDIO};

pub const TRANSCRIPTION_FAILED: &str = "Speech-to-Text failed";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub transcript: String,
    pub lang_used: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<R, T, S>(
    State(state): State<AppState<R, T, S>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError>
where
    R: SpeechRecognizer + ?Sized + 'static,
    T: Translator + ?Sized + 'static,
    S: SpeechSynthesizer + ?Sized + 'static,
{
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request is not multipart");
        ApiError::validation(NO_AUDIO)
    })?;

    let mut audio: Option<Vec<u8>> = None;
    let mut language: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(upload_error(e)),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let data = field.bytes().await.map_err(upload_error)?;
                audio = Some(data.to_vec());
            }
            Some("langName") => {
                language = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            _ => {}
        }
    }

    let audio = audio
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::validation(NO_AUDIO))?;

    tracing::debug!(bytes = audio.len(), language = ?language, "Audio upload received");

    let request = TranscriptionRequest::new(audio, state.audio_format)
        .with_declared_language(language);
    let service = Arc::clone(&state.transcription_service);
    let result = run_to_completion(async move { service.transcribe(&request).await })
        .await
        .map_err(ApiError::service(TRANSCRIPTION_FAILED))?;

    Ok(Json(TranscribeResponse {
        transcript: result.transcript,
        lang_used: result.locales_used,
    }))
}

/// Parser detail stays in the log; the caller only learns size or shape.
fn upload_error(error: MultipartError) -> ApiError {
    tracing::warn!(error = %error, status = %error.status(), "Failed to read multipart");
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::validation(INVALID_UPLOAD)
    }
}
