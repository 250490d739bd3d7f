//! Globe and debug settings, persisted as `meridian.ron`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe generation and shading.
    pub globe: GlobeConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe generation and shading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Four-way subdivisions of the base icosahedron (0-5).
    pub subdivisions: u32,
    /// Normal smoothing factor (0.0 = flat, 1.0 = fully smoothed).
    pub smoothing: f32,
    /// Use transition textures between terrains.
    pub transitions: bool,
    /// Seed for the demo world.
    pub seed: u32,
    /// Noise value above which the demo world places land (-1.0 - 1.0).
    pub sea_level: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file in debug builds.
    pub log_to_file: bool,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            subdivisions: 4,
            smoothing: 1.0,
            transitions: true,
            seed: 0,
            sea_level: 0.2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "meridian.ron";

/// Platform config directory for Meridian, falling back to `./config`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("meridian"))
        .unwrap_or_else(|| PathBuf::from("config"))
}

fn read_settings(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Read `meridian.ron` from `config_dir`. A missing file is replaced by
    /// the defaults, which are written back so the user has something to edit.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default globe settings to {}", path.display());
            return Ok(config);
        }

        let config = read_settings(&path)?;
        log::info!(
            "Loaded globe settings from {} (depth {}, seed {})",
            path.display(),
            config.globe.subdivisions,
            config.globe.seed
        );
        Ok(config)
    }

    /// Write the settings to `config_dir/meridian.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        let write_error = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .struct_names(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Encode)?;
        std::fs::write(&path, text).map_err(write_error)
    }

    /// Re-read the settings file. Returns the new settings only when they
    /// differ from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_settings(&config_dir.join(CONFIG_FILE))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("Globe settings changed on disk");
        Ok(Some(fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.globe.subdivisions, 4);
        assert_eq!(config.globe.smoothing, 1.0);
        assert!(config.globe.transitions);
        assert_eq!(config.debug.log_level, "info");
        assert!(config.debug.log_to_file);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = ron::from_str("(globe: (subdivisions: 2, seed: 9))").unwrap();
        assert_eq!(config.globe.subdivisions, 2);
        assert_eq!(config.globe.seed, 9);
        assert_eq!(config.globe.sea_level, GlobeConfig::default().sea_level);
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_unknown_and_commented_fields_are_accepted() {
        let text = "// globe tweaks\n(\n  globe: (transitions: false),\n  render_scale: 2.0,\n)";
        let config: Config = ron::from_str(text).unwrap();
        assert!(!config.globe.transitions);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.globe.subdivisions = 5;
        config.globe.smoothing = 0.25;
        config.globe.seed = 77;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        assert_eq!(Config::load_or_create(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_reload_reports_only_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut edited = config.clone();
        edited.globe.smoothing = 0.0;
        edited.save(dir.path()).unwrap();
        let fresh = config.reload(dir.path()).unwrap().expect("edit detected");
        assert_eq!(fresh.globe.smoothing, 0.0);
    }

    #[test]
    fn test_malformed_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{{not valid}}").unwrap();
        match Config::load_or_create(dir.path()) {
            Err(err @ ConfigError::Parse { .. }) => {
                assert!(err.to_string().contains(CONFIG_FILE), "{err}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_reload_without_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
