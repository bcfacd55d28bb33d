use crate::application::ports::{SpeechSynthesizer, SynthesizerError, VoiceSelection};

/// MPEG-1 Layer III frame header (128 kbps, 44.1 kHz, mono).
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0xC4];

pub struct MockSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        _voice: &VoiceSelection,
    ) -> Result<Vec<u8>, SynthesizerError> {
        let mut audio = MP3_FRAME_HEADER.to_vec();
        audio.extend_from_slice(text.as_bytes());
        Ok(audio)
    }
}
