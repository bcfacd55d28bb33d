mod mock_speech_recognizer;
mod mock_speech_synthesizer;
mod mock_translator;

pub use mock_speech_recognizer::MockSpeechRecognizer;
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use mock_translator::MockTranslator;
