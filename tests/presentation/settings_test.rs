use std::collections::HashMap;
use std::time::Duration;

use mulberry::domain::AudioEncoding;
use mulberry::presentation::config::{DEFAULT_PORT, Environment, OutboundSettings, Settings};

#[test]
fn given_default_settings_when_created_then_match_gateway_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert_eq!(settings.google.location, "global");
    assert!(!settings.languages.strict);
    assert_eq!(settings.transcription.primary_locale, "en-US");
    assert_eq!(settings.transcription.alternative_locales, vec!["es-ES"]);
    assert_eq!(
        settings.transcription.audio_encoding(),
        Ok(AudioEncoding::WebmOpus)
    );
}

#[test]
fn given_default_outbound_settings_when_building_policy_then_single_attempt_without_timeout() {
    let policy = OutboundSettings::default().policy();

    assert_eq!(policy.timeout, None);
    assert!(!policy.retry_once);
}

#[test]
fn given_timeout_and_retry_when_building_policy_then_both_are_applied() {
    let settings = OutboundSettings {
        timeout_ms: Some(1500),
        retry_once: true,
        retry_jitter_ms: 100,
    };

    let policy = settings.policy();

    assert_eq!(policy.timeout, Some(Duration::from_millis(1500)));
    assert_eq!(policy.max_attempts(), 2);
    assert_eq!(policy.retry_jitter, Duration::from_millis(100));
}

#[test]
fn given_transcription_settings_when_building_locale_pair_then_copies_locales() {
    let pair = Settings::default().transcription.locale_pair();

    assert_eq!(pair.primary, "en-US");
    assert_eq!(pair.alternatives, vec!["es-ES".to_string()]);
}

#[test]
fn given_prefixed_variables_when_loading_then_nested_sections_are_overridden() {
    let vars = HashMap::from([
        ("APP_SERVER__PORT".to_string(), "8080".to_string()),
        ("APP_GOOGLE__PROJECT_ID".to_string(), "demo-project".to_string()),
        ("APP_LANGUAGES__STRICT".to_string(), "true".to_string()),
        ("APP_OUTBOUND__TIMEOUT_MS".to_string(), "1500".to_string()),
        (
            "APP_TRANSCRIPTION__ALTERNATIVE_LOCALES".to_string(),
            "es-ES tr-TR".to_string(),
        ),
    ]);

    let settings = Settings::load_with(Environment::Test, Some(vars)).unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.google.project_id, "demo-project");
    assert!(settings.languages.strict);
    assert_eq!(settings.outbound.timeout_ms, Some(1500));
    assert_eq!(
        settings.transcription.alternative_locales,
        vec!["es-ES", "tr-TR"]
    );
    assert_eq!(settings.transcription.primary_locale, "en-US");
}

#[test]
fn given_unprefixed_variables_when_loading_then_defaults_are_kept() {
    let vars = HashMap::from([
        ("SERVER__PORT".to_string(), "9000".to_string()),
        ("OTHER_LANGUAGES__STRICT".to_string(), "true".to_string()),
    ]);

    let settings = Settings::load_with(Environment::Test, Some(vars)).unwrap();

    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert!(!settings.languages.strict);
}
