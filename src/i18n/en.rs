//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Liquid Water");

    // Tab bar
    m.insert(Key::TabHome, "Home");
    m.insert(Key::TabDemo, "Demo");

    // Home Page
    m.insert(Key::HomeTitle, "Liquid Water");
    m.insert(Key::HomeSubtitle, "Experience the future of design");
    m.insert(Key::FeatureFluidTitle, "Fluid Interactions");
    m.insert(
        Key::FeatureFluidDesc,
        "Touch and feel the liquid responsiveness",
    );
    m.insert(Key::FeatureDynamicTitle, "Dynamic Animations");
    m.insert(
        Key::FeatureDynamicDesc,
        "Watch elements flow like liquid mercury",
    );
    m.insert(Key::FeatureGlassTitle, "Glass Morphism");
    m.insert(
        Key::FeatureGlassDesc,
        "Translucent surfaces with depth and beauty",
    );
    m.insert(Key::ViewDemo, "View Demo");

    // Gallery Page
    m.insert(Key::GalleryTitle, "Component Gallery");
    m.insert(Key::GallerySubtitle, "Interactive Liquid Water components");
    m.insert(Key::SectionWaves, "Liquid Waves");
    m.insert(Key::SectionLoading, "Liquid Loading");
    m.insert(Key::SectionProgress, "Liquid Progress");
    m.insert(Key::SectionToggle, "Liquid Toggle");
    m.insert(Key::SectionTextField, "Liquid Text Field");
    m.insert(Key::ToggleLabel, "Enable liquid effects");
    m.insert(Key::TextFieldPlaceholder, "Enter your text...");
    m.insert(Key::ShowcaseMorphTitle, "Morphing Surfaces");
    m.insert(
        Key::ShowcaseMorphDesc,
        "Watch surfaces transform with liquid-like fluidity",
    );
    m.insert(Key::ShowcaseParticleTitle, "Particle Systems");
    m.insert(
        Key::ShowcaseParticleDesc,
        "Dynamic particles that respond to touch",
    );
    m.insert(Key::ShowcaseFlowTitle, "Fluid Animations");
    m.insert(
        Key::ShowcaseFlowDesc,
        "Smooth transitions that feel natural",
    );
    m.insert(Key::ExperienceDemo, "Experience Demo");
    m.insert(Key::ResetDemo, "Reset Demo");

    // Interactive Overlay
    m.insert(Key::TouchAnywhere, "Touch anywhere");
    m.insert(Key::TouchSubtitle, "Experience liquid interactions");
    m.insert(Key::Close, "Close");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
