use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, languages_handler, synthesize_handler, transcribe_handler, translate_handler,
};
use crate::presentation::state::AppState;

pub const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<R, T, S>(state: AppState<R, T, S>) -> Router
where
    R: SpeechRecognizer + ?Sized + 'static,
    T: Translator + ?Sized + 'static,
    S: SpeechSynthesizer + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/languages", get(languages_handler::<R, T, S>))
        .route("/tts", post(synthesize_handler::<R, T, S>))
        .route(
            "/stt",
            post(transcribe_handler::<R, T, S>)
                .layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .route("/translate", post(translate_handler::<R, T, S>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
