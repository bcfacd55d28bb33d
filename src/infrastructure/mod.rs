pub mod google;
pub mod http;
pub mod mock;
pub mod observability;
mod speech_backend_factory;

pub use speech_backend_factory::{SpeechBackendFactory, SpeechBackends, SpeechProvider};
