use super::language_profile::LanguageProfile;

pub const DEFAULT_LANGUAGE: &str = "english";

const PROFILES: [LanguageProfile; 4] = [
    LanguageProfile::new("english", "en-US", "en-US", "en"),
    LanguageProfile::new("spanish", "es-ES", "es-ES", "es"),
    LanguageProfile::new("turkish", "tr-TR", "tr-TR", "tr"),
    LanguageProfile::new("hindi", "hi-IN", "hi-IN", "hi"),
];

/// Immutable lookup from canonical language names to their profiles.
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: &'static [LanguageProfile],
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self {
            profiles: &PROFILES,
        }
    }

    /// Case-insensitive lookup that never fails: unknown names resolve to English.
    pub fn resolve(&self, name: &str) -> &LanguageProfile {
        self.lookup(name).unwrap_or_else(|| {
            tracing::debug!(language = %name, "Unknown language, falling back to english");
            self.english()
        })
    }

    /// Strict lookup. Returns `None` for names outside the registry.
    pub fn lookup(&self, name: &str) -> Option<&LanguageProfile> {
        let key = name.trim().to_lowercase();
        self.profiles.iter().find(|p| p.name == key)
    }

    pub fn english(&self) -> &LanguageProfile {
        &self.profiles[0]
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        self.profiles
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
