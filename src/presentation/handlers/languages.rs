use axum::Json;
use axum::extract::State;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::LanguageProfile;
use crate::presentation::state::AppState;

pub async fn languages_handler<R, T, S>(
    State(state): State<AppState<R, T, S>>,
) -> Json<Vec<LanguageProfile>>
where
    R: SpeechRecognizer + ?Sized + 'static,
    T: Translator + ?Sized + 'static,
    S: SpeechSynthesizer + ?Sized + 'static,
{
    Json(state.registry.profiles().to_vec())
}
