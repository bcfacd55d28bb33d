use crate::infrastructure::SpeechProvider;

/// Scaffold mode runs the gateway against deterministic in-process backends.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl ScaffoldConfig {
    pub fn provider(&self) -> SpeechProvider {
        if self.enabled {
            SpeechProvider::Mock
        } else {
            SpeechProvider::Google
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }
}
