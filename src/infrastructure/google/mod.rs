mod client_config;
mod credentials;
mod service_account;
mod speech_client;
mod translate_client;
mod tts_client;

pub use client_config::GoogleClientConfig;
pub use credentials::{
    API_KEY_HEADER, Authorization, CredentialsError, GoogleCredentials, SERVICE_ACCOUNT_TYPE,
    TokenSource,
};
pub use service_account::{
    CLOUD_PLATFORM_SCOPE, DEFAULT_TOKEN_URI, ServiceAccountKey, ServiceAccountTokenSource,
};
pub use speech_client::{DEFAULT_SPEECH_ENDPOINT, GoogleSpeechClient};
pub use translate_client::{DEFAULT_LOCATION, DEFAULT_TRANSLATE_ENDPOINT, GoogleTranslateClient};
pub use tts_client::{DEFAULT_TTS_ENDPOINT, GoogleTtsClient};
