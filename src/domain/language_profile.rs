use serde::Serialize;

/// The three downstream code forms for one canonical language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub name: &'static str,
    pub stt_locale: &'static str,
    pub tts_locale: &'static str,
    pub translate_code: &'static str,
}

impl LanguageProfile {
    pub const fn new(
        name: &'static str,
        stt_locale: &'static str,
        tts_locale: &'static str,
        translate_code: &'static str,
    ) -> Self {
        Self {
            name,
            stt_locale,
            tts_locale,
            translate_code,
        }
    }
}
