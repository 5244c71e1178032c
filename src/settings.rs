//! Serializable parallax scroll view settings.
//!
//! Settings can come from a JSON file (see [`ParallaxSettings::default_path`])
//! or from the host application's own persistence.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a parallax scroll view and the rows it hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    /// Resting header height; `None` uses the header's natural height
    pub expanded_height: Option<f32>,
    /// Whether the scroll bar is shown
    pub shows_indicators: bool,
    /// Number of placeholder rows in the scroll body
    pub row_count: usize,
    /// Seed for placeholder row generation
    pub seed: u64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            expanded_height: Some(300.0),
            shows_indicators: true,
            row_count: 60,
            seed: 42,
        }
    }
}

impl ParallaxSettings {
    /// Loads settings from a JSON file. Missing fields take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes settings as pretty-printed JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings file {}", path.display()))
    }

    /// Returns `<config dir>/parallax-scroll/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parallax-scroll").join("settings.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = ParallaxSettings::from_json(r#"{ "row_count": 5 }"#).unwrap();
        assert_eq!(settings.row_count, 5);
        assert_eq!(settings.expanded_height, Some(300.0));
        assert!(settings.shows_indicators);
    }

    #[test]
    fn test_null_expanded_height() {
        let settings = ParallaxSettings::from_json(r#"{ "expanded_height": null }"#).unwrap();
        assert_eq!(settings.expanded_height, None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ParallaxSettings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_save_and_load_file() -> Result<()> {
        let path = env::temp_dir()
            .join("parallax_scroll_settings_test")
            .join("settings.json");
        let _ = fs::remove_file(&path);

        let settings = ParallaxSettings {
            expanded_height: None,
            shows_indicators: false,
            row_count: 12,
            seed: 7,
        };
        settings.save(&path)?;
        assert_eq!(ParallaxSettings::load(&path)?, settings);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ParallaxSettings::load("/nonexistent/parallax/settings.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/parallax/settings.json"));
    }
}
