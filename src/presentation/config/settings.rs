use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_ALTERNATIVE_LOCALE, DEFAULT_PRIMARY_LOCALE, LocalePair};
use crate::domain::{AudioEncoding, DEFAULT_SAMPLE_RATE_HERTZ};
use crate::infrastructure::google::{
    DEFAULT_LOCATION, DEFAULT_SPEECH_ENDPOINT, DEFAULT_TRANSLATE_ENDPOINT, DEFAULT_TTS_ENDPOINT,
    GoogleClientConfig,
};
use crate::infrastructure::http::{DEFAULT_RETRY_JITTER, OutboundPolicy};

use super::Environment;

pub const TRANSLATION_CREDENTIALS_VAR: &str = "GOOGLE_MULBERRY_CREDENTIALS";
pub const SPEECH_CREDENTIALS_VAR: &str = "GOOGLE_STT_CREDENTIALS";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PROJECT_ID: &str = "mulberry-486705";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub transcription: TranscriptionSettings,
    pub outbound: OutboundSettings,
    pub languages: LanguageSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) under `APP_`-prefixed variables,
    /// e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with(environment, None)
    }

    /// Like [`Settings::load`], but reads variables from `vars` instead of the
    /// process environment when given.
    pub fn load_with(
        environment: Environment,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("transcription.alternative_locales")
                    .try_parsing(true)
                    .source(vars.map(|vars| vars.into_iter().collect())),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    pub project_id: String,
    pub location: String,
    pub speech_endpoint: String,
    pub translate_endpoint: String,
    pub tts_endpoint: String,
    pub translation_credentials: Option<PathBuf>,
    pub speech_credentials: Option<PathBuf>,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            speech_endpoint: DEFAULT_SPEECH_ENDPOINT.to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            tts_endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            translation_credentials: std::env::var_os(TRANSLATION_CREDENTIALS_VAR)
                .map(PathBuf::from),
            speech_credentials: std::env::var_os(SPEECH_CREDENTIALS_VAR).map(PathBuf::from),
        }
    }
}

impl GoogleSettings {
    pub fn client_config(&self, policy: OutboundPolicy) -> GoogleClientConfig {
        GoogleClientConfig {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            speech_endpoint: self.speech_endpoint.clone(),
            translate_endpoint: self.translate_endpoint.clone(),
            tts_endpoint: self.tts_endpoint.clone(),
            translation_credentials: self.translation_credentials.clone(),
            speech_credentials: self.speech_credentials.clone(),
            policy,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub primary_locale: String,
    pub alternative_locales: Vec<String>,
    pub encoding: String,
    pub sample_rate_hertz: u32,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            primary_locale: DEFAULT_PRIMARY_LOCALE.to_string(),
            alternative_locales: vec![DEFAULT_ALTERNATIVE_LOCALE.to_string()],
            encoding: AudioEncoding::WebmOpus.as_str().to_string(),
            sample_rate_hertz: DEFAULT_SAMPLE_RATE_HERTZ,
        }
    }
}

impl TranscriptionSettings {
    pub fn locale_pair(&self) -> LocalePair {
        LocalePair {
            primary: self.primary_locale.clone(),
            alternatives: self.alternative_locales.clone(),
        }
    }

    pub fn audio_encoding(&self) -> Result<AudioEncoding, String> {
        AudioEncoding::try_from(self.encoding.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutboundSettings {
    pub timeout_ms: Option<u64>,
    pub retry_once: bool,
    pub retry_jitter_ms: u64,
}

impl Default for OutboundSettings {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            retry_once: false,
            retry_jitter_ms: DEFAULT_RETRY_JITTER.as_millis() as u64,
        }
    }
}

impl OutboundSettings {
    pub fn policy(&self) -> OutboundPolicy {
        OutboundPolicy {
            timeout: self.timeout_ms.map(Duration::from_millis),
            retry_once: self.retry_once,
            retry_jitter: Duration::from_millis(self.retry_jitter_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    /// Reject unknown language names with 400 instead of falling back to english.
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: String::new(),
            enable_json: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}
