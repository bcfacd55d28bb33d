use std::sync::Arc;

use mulberry::application::ports::{Translator, TranslatorError};
use mulberry::infrastructure::google::{GoogleCredentials, GoogleTranslateClient};
use mulberry::infrastructure::http::OutboundPolicy;

use super::{StaticTokenSource, start_mock_google_server};

fn client(base_url: &str) -> GoogleTranslateClient {
    GoogleTranslateClient::new(
        base_url,
        "test-project",
        "global",
        GoogleCredentials::Bearer(Arc::new(StaticTokenSource::new("token-1"))),
        OutboundPolicy::default(),
    )
}

#[tokio::test]
async fn given_translation_response_when_translating_then_returns_translated_texts() {
    let body = r#"{"translations": [{"translatedText": "Hola", "detectedLanguageCode": "en"}]}"#;
    let server = start_mock_google_server(200, body.to_string()).await;

    let result = client(&server.base_url)
        .translate("Hello", None, "es")
        .await
        .unwrap();

    assert_eq!(result, vec!["Hola".to_string()]);
}

#[tokio::test]
async fn given_no_source_when_translating_then_source_code_is_not_sent() {
    let server = start_mock_google_server(200, r#"{"translations": []}"#.to_string()).await;

    client(&server.base_url)
        .translate("Hello", None, "tr")
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(
        request.path,
        "/v3/projects/test-project/locations/global:translateText"
    );
    assert_eq!(request.headers.get("authorization").unwrap(), "Bearer token-1");
    assert_eq!(request.body["contents"], serde_json::json!(["Hello"]));
    assert_eq!(request.body["mimeType"], "text/plain");
    assert_eq!(request.body["targetLanguageCode"], "tr");
    assert!(request.body.get("sourceLanguageCode").is_none());
}

#[tokio::test]
async fn given_source_when_translating_then_source_code_is_sent() {
    let server = start_mock_google_server(200, r#"{"translations": []}"#.to_string()).await;

    client(&server.base_url)
        .translate("Hello", Some("en"), "hi")
        .await
        .unwrap();

    assert_eq!(server.last_request().body["sourceLanguageCode"], "en");
}

#[tokio::test]
async fn given_error_status_when_translating_then_returns_api_error() {
    let server = start_mock_google_server(403, r#"{"error": {}}"#.to_string()).await;

    let result = client(&server.base_url).translate("Hello", None, "es").await;

    assert!(matches!(result, Err(TranslatorError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_token_fetch_failure_when_translating_then_returns_credentials_error() {
    let server = start_mock_google_server(200, r#"{"translations": []}"#.to_string()).await;
    let client = GoogleTranslateClient::new(
        &server.base_url,
        "test-project",
        "global",
        GoogleCredentials::Bearer(Arc::new(StaticTokenSource::failing())),
        OutboundPolicy::default(),
    );

    let result = client.translate("Hello", None, "es").await;

    assert!(matches!(result, Err(TranslatorError::Credentials(_))));
}
