//! Internationalization (i18n) support for Liquid Water
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a settings code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Tab bar
    TabHome,
    TabDemo,

    // Home Page
    HomeTitle,
    HomeSubtitle,
    FeatureFluidTitle,
    FeatureFluidDesc,
    FeatureDynamicTitle,
    FeatureDynamicDesc,
    FeatureGlassTitle,
    FeatureGlassDesc,
    ViewDemo,

    // Gallery Page
    GalleryTitle,
    GallerySubtitle,
    SectionWaves,
    SectionLoading,
    SectionProgress,
    SectionToggle,
    SectionTextField,
    ToggleLabel,
    TextFieldPlaceholder,
    ShowcaseMorphTitle,
    ShowcaseMorphDesc,
    ShowcaseParticleTitle,
    ShowcaseParticleDesc,
    ShowcaseFlowTitle,
    ShowcaseFlowDesc,
    ExperienceDemo,
    ResetDemo,

    // Interactive Overlay
    TouchAnywhere,
    TouchSubtitle,
    Close,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::TabHome,
        Key::TabDemo,
        Key::HomeTitle,
        Key::HomeSubtitle,
        Key::FeatureFluidTitle,
        Key::FeatureFluidDesc,
        Key::FeatureDynamicTitle,
        Key::FeatureDynamicDesc,
        Key::FeatureGlassTitle,
        Key::FeatureGlassDesc,
        Key::ViewDemo,
        Key::GalleryTitle,
        Key::GallerySubtitle,
        Key::SectionWaves,
        Key::SectionLoading,
        Key::SectionProgress,
        Key::SectionToggle,
        Key::SectionTextField,
        Key::ToggleLabel,
        Key::TextFieldPlaceholder,
        Key::ShowcaseMorphTitle,
        Key::ShowcaseMorphDesc,
        Key::ShowcaseParticleTitle,
        Key::ShowcaseParticleDesc,
        Key::ShowcaseFlowTitle,
        Key::ShowcaseFlowDesc,
        Key::ExperienceDemo,
        Key::ResetDemo,
        Key::TouchAnywhere,
        Key::TouchSubtitle,
        Key::Close,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing {:?}", lang, key);
            }
        }
    }

    #[test]
    fn language_codes_parse() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code(" EN "), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
