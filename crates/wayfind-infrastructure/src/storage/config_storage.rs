//! Application configuration file storage (`config.toml`).

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;

use wayfind_core::config::AppConfig;
use wayfind_core::error::{Result, WayfindError};

use crate::paths::WayfindPaths;

/// Storage for behavioral defaults (`config.toml`).
///
/// Missing file means defaults; writes go through a temp file + rename so a
/// crash never leaves a half-written config behind.
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates storage at the default location (`~/.config/wayfind/config.toml`).
    pub fn default_location() -> Result<Self> {
        let path =
            WayfindPaths::config_file().map_err(|e| WayfindError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// Loads the configuration, or defaults when the file is absent.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| WayfindError::io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| WayfindError::Serialization {
            format: "TOML".to_string(),
            message: e.to_string(),
        })
    }

    /// Saves the configuration atomically.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| WayfindError::io(e.to_string()))?;
            }
        }

        let toml_string = toml::to_string_pretty(config).map_err(|e| WayfindError::Serialization {
            format: "TOML".to_string(),
            message: e.to_string(),
        })?;

        let tmp_path = self.path.with_extension("toml.tmp");
        let mut tmp_file = File::create(&tmp_path).map_err(|e| WayfindError::io(e.to_string()))?;
        tmp_file
            .write_all(toml_string.as_bytes())
            .map_err(|e| WayfindError::io(e.to_string()))?;
        tmp_file
            .sync_all()
            .map_err(|e| WayfindError::io(e.to_string()))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| WayfindError::io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wayfind_core::geo::SearchRadius;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));
        let config = storage.load().unwrap();
        assert_eq!(config.default_radius, SearchRadius::Km10);
        assert_eq!(config.category_keyword, "museum");
    }

    #[test]
    fn test_save_and_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));

        let mut config = AppConfig::default();
        config.default_radius = SearchRadius::Km20;
        config.category_keyword = "gallery".to_string();
        storage.save(&config).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.default_radius, SearchRadius::Km20);
        assert_eq!(loaded.category_keyword, "gallery");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_radius = [broken").unwrap();

        let storage = ConfigStorage::new(path);
        assert!(storage.load().is_err());
    }
}
