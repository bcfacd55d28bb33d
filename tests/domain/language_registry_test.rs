use mulberry::domain::LanguageRegistry;

const SUPPORTED: [&str; 4] = ["english", "spanish", "turkish", "hindi"];

#[test]
fn given_supported_name_in_any_casing_when_resolving_then_matches_lowercase_profile() {
    let registry = LanguageRegistry::new();

    for name in SUPPORTED {
        let expected = *registry.resolve(name);
        for variant in [name.to_uppercase(), capitalize(name), format!("  {}  ", name)] {
            assert_eq!(*registry.resolve(&variant), expected, "variant {:?}", variant);
        }
    }
}

#[test]
fn given_unknown_name_when_resolving_then_returns_english_profile() {
    let registry = LanguageRegistry::new();

    for name in ["klingon", "", "   ", "en", "español"] {
        let profile = registry.resolve(name);
        assert_eq!(profile.name, "english");
        assert_eq!(profile.translate_code, "en");
    }
}

#[test]
fn given_interleaved_lookups_when_resolving_same_name_then_profile_is_identical() {
    let registry = LanguageRegistry::new();
    let first = *registry.resolve("Spanish");

    for name in ["hindi", "klingon", "TURKISH", "english"] {
        registry.resolve(name);
        assert_eq!(*registry.resolve("spanish"), first);
    }
}

#[test]
fn given_spanish_when_resolving_then_returns_all_three_codes() {
    let registry = LanguageRegistry::new();
    let profile = registry.resolve("spanish");

    assert_eq!(profile.stt_locale, "es-ES");
    assert_eq!(profile.tts_locale, "es-ES");
    assert_eq!(profile.translate_code, "es");
}

#[test]
fn given_unknown_name_when_strict_lookup_then_returns_none() {
    let registry = LanguageRegistry::new();

    assert!(registry.lookup("klingon").is_none());
    assert_eq!(registry.lookup("HINDI").map(|p| p.stt_locale), Some("hi-IN"));
}

#[test]
fn given_registry_when_listing_profiles_then_contains_four_languages() {
    let registry = LanguageRegistry::new();
    let names: Vec<_> = registry.profiles().iter().map(|p| p.name).collect();

    assert_eq!(names, SUPPORTED);
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
