//! Scene configuration.
//!
//! Loaded from TOML. Every key is optional; missing keys fall back to the
//! values in [`SceneConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, TileError};

/// Top-level configuration for a scene and its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Background frame color.
    pub background: Color,
    /// Number of frames the demo driver renders before exiting.
    pub frames: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "tilekit".to_string(),
            background: Color::PICO_VOID,
            frames: 3,
        }
    }
}

impl SceneConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TileError::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SceneConfig::from_toml("").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = SceneConfig::from_toml(
            r#"
            width = 800
            title = "demo"

            [background]
            r = 10
            g = 20
            b = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert_eq!(config.title, "demo");
        assert_eq!(config.background, Color::rgb(10, 20, 30));
    }

    #[test]
    fn zero_viewport_rejected() {
        let err = SceneConfig::from_toml("width = 0").unwrap_err();
        assert!(matches!(err, TileError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SceneConfig::from_toml("width = [").unwrap_err();
        assert!(matches!(err, TileError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        std::fs::write(&path, "height = 200\nframes = 1").unwrap();
        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.height, 200);
        assert_eq!(config.frames, 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/tilekit.toml").unwrap_err();
        assert!(matches!(err, TileError::Io(_)));
    }
}
