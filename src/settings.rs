//! Session settings
//!
//! Read from a JSON file by the host before a game starts. Missing fields fall
//! back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Error, Result};
use crate::tuning::Tuning;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen width in pixels
    pub width: u32,
    /// Screen height in pixels
    pub height: u32,
    /// Seed for powerup spawn rolls
    pub seed: u64,
    /// Level files in menu order
    pub levels: Vec<PathBuf>,
    /// Play the looping background track
    pub music: bool,
    /// Gameplay balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            seed: 0x5eed_b10c,
            levels: ["one", "two", "three", "four"]
                .iter()
                .map(|name| PathBuf::from(format!("resources/levels/{}.lvl", name)))
                .collect(),
            music: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({}x{}, {} levels)",
            path.display(),
            settings.width,
            settings.height,
            settings.levels.len()
        );
        Ok(settings)
    }

    /// Screen size as floats
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_list_four_levels() {
        let settings = Settings::default();
        assert_eq!(settings.levels.len(), 4);
        assert_eq!(settings.dimensions(), (800.0, 600.0));
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(
            r#"{ "width": 1024, "levels": ["a.lvl"], "tuning": { "pad_growth": 80.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, SCREEN_HEIGHT);
        assert_eq!(settings.levels, vec![PathBuf::from("a.lvl")]);
        assert_eq!(settings.tuning.pad_growth, 80.0);
        assert!(settings.music);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Settings::from_json("{ width: }"),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
