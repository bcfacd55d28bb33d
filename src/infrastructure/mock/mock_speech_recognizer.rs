use crate::application::ports::{
    RecognitionConfig, RecognizedSegment, RecognizerError, SpeechRecognizer,
};

/// Returns a fixed set of segments regardless of the audio it is given.
pub struct MockSpeechRecognizer {
    segments: Vec<RecognizedSegment>,
}

impl MockSpeechRecognizer {
    pub fn new(segments: Vec<RecognizedSegment>) -> Self {
        Self { segments }
    }
}

impl Default for MockSpeechRecognizer {
    fn default() -> Self {
        Self::new(vec![RecognizedSegment::new(vec![
            "Mock transcript".to_string(),
        ])])
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(
        &self,
        _config: &RecognitionConfig,
        _audio: &[u8],
    ) -> Result<Vec<RecognizedSegment>, RecognizerError> {
        Ok(self.segments.clone())
    }
}
