mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    DEFAULT_PORT, DEFAULT_PROJECT_ID, GoogleSettings, LanguageSettings, LoggingSettings,
    OutboundSettings, SPEECH_CREDENTIALS_VAR, ServerSettings, Settings, TRANSLATION_CREDENTIALS_VAR,
    TranscriptionSettings,
};
