//! Settings persistence coordination.
//!
//! Resolves the demo's [`ParallaxSettings`] at startup and persists them to
//! eframe's storage as JSON.

use parallax_scroll::ParallaxSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storage key for the demo settings.
pub const SETTINGS_KEY: &str = "parallax_settings";

/// Coordinates settings resolution and persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Resolves the startup settings.
    ///
    /// Order: explicit file, then the default settings file if it exists, then
    /// eframe storage, then defaults. Unreadable files are logged and skipped.
    pub fn resolve(storage: Option<&dyn eframe::Storage>, explicit: Option<&Path>) -> ParallaxSettings {
        if let Some(path) = explicit {
            match ParallaxSettings::load(path) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("{:#}", e),
            }
        }

        if let Some(path) = ParallaxSettings::default_path().filter(|p| p.exists()) {
            match ParallaxSettings::load(&path) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("{:#}", e),
            }
        }

        Self::load_setting_or(storage, SETTINGS_KEY, ParallaxSettings::default())
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or invalid
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        storage
            .and_then(|storage| storage.get_string(key))
            .and_then(|json_str| serde_json::from_str(&json_str).ok())
            .unwrap_or(default)
    }

    /// Saves a setting to persistent storage as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("Failed to serialize setting {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_settings() {
        let mut storage = MockStorage::new();
        let settings = ParallaxSettings {
            expanded_height: Some(220.0),
            shows_indicators: false,
            row_count: 10,
            seed: 3,
        };

        SettingsCoordinator::save_setting(&mut storage, SETTINGS_KEY, &settings);

        let loaded = SettingsCoordinator::load_setting_or(
            Some(&storage),
            SETTINGS_KEY,
            ParallaxSettings::default(),
        );
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string(SETTINGS_KEY, "not json".to_string());

        let loaded: i32 = SettingsCoordinator::load_setting_or(Some(&storage), SETTINGS_KEY, 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_no_storage_uses_default() {
        let loaded: i32 = SettingsCoordinator::load_setting_or(None, SETTINGS_KEY, 5);
        assert_eq!(loaded, 5);
    }

    #[test]
    fn test_unreadable_explicit_file_falls_through_to_storage() {
        let mut storage = MockStorage::new();
        let stored = ParallaxSettings {
            row_count: 3,
            ..ParallaxSettings::default()
        };
        SettingsCoordinator::save_setting(&mut storage, SETTINGS_KEY, &stored);

        let resolved = SettingsCoordinator::resolve(
            Some(&storage),
            Some(Path::new("/nonexistent/parallax/settings.json")),
        );

        // A default settings file on the test machine would take precedence
        if !ParallaxSettings::default_path().is_some_and(|p| p.exists()) {
            assert_eq!(resolved, stored);
        }
    }
}
