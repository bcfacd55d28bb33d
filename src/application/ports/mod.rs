mod speech_recognizer;
mod speech_synthesizer;
mod translator;

pub use speech_recognizer::{RecognitionConfig, RecognizedSegment, RecognizerError, SpeechRecognizer};
pub use speech_synthesizer::{NEUTRAL_GENDER, SpeechSynthesizer, SynthesizerError, VoiceSelection};
pub use translator::{Translator, TranslatorError};
