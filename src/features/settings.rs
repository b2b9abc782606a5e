//! Application settings persistence
//!
//! Handles loading user preferences from the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Most particles a page will float
pub const MAX_PARTICLES: usize = 32;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Component gallery settings
    #[serde(default)]
    pub demo: DemoSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Interface language ("en" or "zh")
    pub language: String,
    /// Freeze ambient loops and skip floating particles
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Component gallery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Particles floating over the home page
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Progress bar value on launch (0.0 to 1.0)
    #[serde(default = "default_initial_progress")]
    pub initial_progress: f32,
    /// Progress interpolation window in milliseconds (800 to 1000)
    #[serde(default = "default_progress_duration_ms")]
    pub progress_duration_ms: u64,
}

fn default_particle_count() -> usize {
    6
}

fn default_initial_progress() -> f32 {
    0.7
}

fn default_progress_duration_ms() -> u64 {
    800
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            reduced_motion: false,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            initial_progress: default_initial_progress(),
            progress_duration_ms: default_progress_duration_ms(),
        }
    }
}

impl DemoSettings {
    /// Particle count capped at `MAX_PARTICLES`
    pub fn particle_count(&self) -> usize {
        self.particle_count.min(MAX_PARTICLES)
    }

    pub fn progress_duration(&self) -> Duration {
        Duration::from_millis(self.progress_duration_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "liquid", "LiquidWater")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::info!("No settings at {:?} ({}), using defaults", path, e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("liquid-water-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn defaults_match_the_demo() {
        let settings = Settings::default();
        assert_eq!(settings.display.language, "en");
        assert!(!settings.display.reduced_motion);
        assert_eq!(settings.demo.particle_count(), 6);
        assert_eq!(settings.demo.initial_progress, 0.7);
        assert_eq!(settings.demo.progress_duration(), Duration::from_millis(800));
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("round_trip.json");
        let mut settings = Settings::default();
        settings.display.reduced_motion = true;
        settings.demo.particle_count = 12;

        settings.save_to_file(&path).expect("save");
        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "language": "zh" } }"#).expect("parse");
        assert_eq!(settings.display.language, "zh");
        assert_eq!(settings.demo, DemoSettings::default());
    }

    #[test]
    fn particle_count_is_capped() {
        let demo = DemoSettings {
            particle_count: 10_000,
            ..Default::default()
        };
        assert_eq!(demo.particle_count(), MAX_PARTICLES);
    }

    #[test]
    fn load_errors_are_classified() {
        let missing = temp_path("does_not_exist.json");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let garbage = temp_path("garbage.json");
        std::fs::create_dir_all(garbage.parent().unwrap()).unwrap();
        std::fs::write(&garbage, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&garbage),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_file(&garbage);
    }
}
