use std::sync::{Arc, Mutex};

use mulberry::application::ports::{
    RecognitionConfig, RecognizedSegment, RecognizerError, SpeechRecognizer,
};
use mulberry::application::services::{
    LocalePair, ServiceError, TranscriptionService, join_top_alternatives,
};
use mulberry::domain::{AudioFormat, TranscriptionRequest};

struct RecordingRecognizer {
    segments: Vec<RecognizedSegment>,
    seen: Mutex<Option<RecognitionConfig>>,
}

impl RecordingRecognizer {
    fn new(segments: Vec<RecognizedSegment>) -> Self {
        Self {
            segments,
            seen: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for RecordingRecognizer {
    async fn recognize(
        &self,
        config: &RecognitionConfig,
        _audio: &[u8],
    ) -> Result<Vec<RecognizedSegment>, RecognizerError> {
        *self.seen.lock().unwrap() = Some(config.clone());
        Ok(self.segments.clone())
    }
}

struct FailingRecognizer;

#[async_trait::async_trait]
impl SpeechRecognizer for FailingRecognizer {
    async fn recognize(
        &self,
        _config: &RecognitionConfig,
        _audio: &[u8],
    ) -> Result<Vec<RecognizedSegment>, RecognizerError> {
        Err(RecognizerError::ApiRequestFailed("status 503".to_string()))
    }
}

fn segment(alternatives: &[&str]) -> RecognizedSegment {
    RecognizedSegment::new(alternatives.iter().map(|s| s.to_string()).collect())
}

fn request() -> TranscriptionRequest {
    TranscriptionRequest::new(vec![1, 2, 3], AudioFormat::default())
}

#[tokio::test]
async fn given_multiple_segments_when_transcribing_then_joins_top_alternatives_with_space() {
    let recognizer = Arc::new(RecordingRecognizer::new(vec![
        segment(&["hola", "ola"]),
        segment(&["mundo"]),
    ]));
    let service = TranscriptionService::new(recognizer, LocalePair::default());

    let result = service.transcribe(&request()).await.unwrap();

    assert_eq!(result.transcript, "hola mundo");
    assert_eq!(result.locales_used, "en-US|es-ES");
}

#[tokio::test]
async fn given_no_segments_when_transcribing_then_returns_empty_transcript() {
    let recognizer = Arc::new(RecordingRecognizer::new(vec![]));
    let service = TranscriptionService::new(recognizer, LocalePair::default());

    let result = service.transcribe(&request()).await.unwrap();

    assert_eq!(result.transcript, "");
}

#[tokio::test]
async fn given_declared_language_when_transcribing_then_configured_locales_are_used() {
    let recognizer = Arc::new(RecordingRecognizer::new(vec![segment(&["merhaba"])]));
    let service = TranscriptionService::new(Arc::clone(&recognizer), LocalePair::default());

    let request = request().with_declared_language(Some("turkish".to_string()));
    service.transcribe(&request).await.unwrap();

    let seen = recognizer.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.language_code, "en-US");
    assert_eq!(seen.alternative_language_codes, vec!["es-ES".to_string()]);
    assert_eq!(seen.sample_rate_hertz, 48_000);
}

#[tokio::test]
async fn given_recognizer_failure_when_transcribing_then_returns_service_error() {
    let service = TranscriptionService::new(Arc::new(FailingRecognizer), LocalePair::default());

    let result = service.transcribe(&request()).await;

    assert!(matches!(result, Err(ServiceError::Transcription(_))));
}

#[test]
fn given_segment_without_alternatives_when_joining_then_segment_is_skipped() {
    let segments = vec![segment(&["hello"]), segment(&[]), segment(&["world"])];

    assert_eq!(join_top_alternatives(&segments), "hello world");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn given_non_ascii_transcript_when_transcribing_then_logs_character_count() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let recognizer = Arc::new(RecordingRecognizer::new(vec![segment(&["çok güzel"])]));
    let service = TranscriptionService::new(recognizer, LocalePair::default());

    service
        .transcribe(&TranscriptionRequest::new(vec![1], AudioFormat::default()))
        .await
        .unwrap();

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("chars=9"), "unexpected log output: {}", output);
}
