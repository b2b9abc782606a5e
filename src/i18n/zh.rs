//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Liquid Water");

    // Tab bar
    m.insert(Key::TabHome, "首页");
    m.insert(Key::TabDemo, "演示");

    // Home Page
    m.insert(Key::HomeTitle, "Liquid Water");
    m.insert(Key::HomeSubtitle, "体验未来的设计");
    m.insert(Key::FeatureFluidTitle, "流体设计");
    m.insert(Key::FeatureFluidDesc, "顺滑自然的有机动画");
    m.insert(Key::FeatureDynamicTitle, "动态效果");
    m.insert(Key::FeatureDynamicDesc, "随交互实时响应的视觉效果");
    m.insert(Key::FeatureGlassTitle, "玻璃质感");
    m.insert(Key::FeatureGlassDesc, "通透而有层次的半透明材质");
    m.insert(Key::ViewDemo, "查看演示");

    // Gallery Page
    m.insert(Key::GalleryTitle, "组件库");
    m.insert(Key::GallerySubtitle, "可交互的 Liquid Water 组件");
    m.insert(Key::SectionWaves, "液态波浪");
    m.insert(Key::SectionLoading, "液态加载");
    m.insert(Key::SectionProgress, "液态进度");
    m.insert(Key::SectionToggle, "液态开关");
    m.insert(Key::SectionTextField, "液态输入框");
    m.insert(Key::ToggleLabel, "启用液态效果");
    m.insert(Key::TextFieldPlaceholder, "请输入文字...");
    m.insert(Key::ShowcaseMorphTitle, "形变图形");
    m.insert(Key::ShowcaseMorphDesc, "流动并无缝变换的形状");
    m.insert(Key::ShowcaseParticleTitle, "粒子系统");
    m.insert(Key::ShowcaseParticleDesc, "随触摸而动的粒子");
    m.insert(Key::ShowcaseFlowTitle, "流体动画");
    m.insert(Key::ShowcaseFlowDesc, "遵循水之物理的运动");
    m.insert(Key::ExperienceDemo, "体验演示");
    m.insert(Key::ResetDemo, "重置演示");

    // Interactive Overlay
    m.insert(Key::TouchAnywhere, "轻触任意位置");
    m.insert(Key::TouchSubtitle, "体验液态交互");
    m.insert(Key::Close, "关闭");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
