//! Application configuration.
//!
//! Settings are read from a JSON file so a session can be tuned without a
//! rebuild. Every section carries defaults, so a partial file (or no file at
//! all) still yields a complete `AppConfig`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SONIC_LIFE_CONFIG";

/// File looked up in the working directory when the env var is unset
pub const DEFAULT_CONFIG_FILE: &str = "sonic_life.json";

/// Process-wide configuration, resolved on first access.
/// Initialise logging before touching it so the load is reported.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load_or_default);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub audio: AudioConfig,
    pub patterns: PatternConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sonic Life".to_owned(),
            width: 1000,
            height: 800,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second, 1..=30
    pub ticks_per_second: u32,
    /// Cell edge in pixels, a power of two in 1..=32
    pub cell_length: u32,
    /// Start ticking as soon as the window opens
    pub start_running: bool,
    /// Live probability used by Random
    pub random_density: f64,
    /// Evolve rows on the rayon pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 10,
            cell_length: 8,
            start_running: false,
            random_density: 0.25,
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Master volume, 0.0..=1.0
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true, volume: 0.4 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PatternConfig {
    /// Extra `.cells` or image files stamped alongside the presets
    pub files: Vec<PathBuf>,
}

impl AppConfig {
    /// Parse a config from JSON text
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Resolve the config from `SONIC_LIFE_CONFIG` or `sonic_life.json`,
    /// falling back to defaults when neither yields a usable file.
    pub fn load_or_default() -> Self {
        let path = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => PathBuf::from(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    log::info!("No {DEFAULT_CONFIG_FILE} found, using default configuration");
                    return Self::default();
                }
                path
            }
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let json = r#"{ "simulation": { "ticks_per_second": 24 }, "audio": { "enabled": false } }"#;
        let config = AppConfig::from_json(json, Path::new("test.json")).unwrap();

        assert_eq!(config.simulation.ticks_per_second, 24);
        assert_eq!(config.simulation.cell_length, 8);
        assert!(!config.audio.enabled);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = AppConfig::from_json("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/sonic_life.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&json, Path::new("x")).unwrap(), config);
    }
}
