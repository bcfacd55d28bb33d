use std::fmt;

pub const DEFAULT_SAMPLE_RATE_HERTZ: u32 = 48_000;

/// Container/codec pairs the recognizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    WebmOpus,
    OggOpus,
    Linear16,
    Flac,
    Mp3,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebmOpus => "WEBM_OPUS",
            Self::OggOpus => "OGG_OPUS",
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
        }
    }
}

impl TryFrom<String> for AudioEncoding {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "WEBM_OPUS" => Ok(Self::WebmOpus),
            "OGG_OPUS" => Ok(Self::OggOpus),
            "LINEAR16" => Ok(Self::Linear16),
            "FLAC" => Ok(Self::Flac),
            "MP3" => Ok(Self::Mp3),
            other => Err(format!("Unsupported audio encoding: {}", other)),
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding and sample rate of an uploaded clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            encoding: AudioEncoding::WebmOpus,
            sample_rate_hertz: DEFAULT_SAMPLE_RATE_HERTZ,
        }
    }
}
