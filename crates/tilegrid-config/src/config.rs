//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where bucket tiles live on disk.
    pub scenery: SceneryConfig,
    /// Planet dimensions for metric bucket sizes.
    pub planet: PlanetConfig,
    /// Neighborhood extents for surrounding-bucket queries.
    pub paging: PagingConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scenery storage layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneryConfig {
    /// Directory that bucket paths are resolved against.
    pub root: PathBuf,
    /// File extension of per-bucket tile files.
    pub tile_extension: String,
}

/// Planet dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Equatorial radius in meters.
    pub equatorial_radius_m: f64,
}

/// Neighborhood extents, in bucket steps from the center bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PagingConfig {
    /// Columns on each side.
    pub radius_cols: u32,
    /// 1/8 degree sub-rows on each side.
    pub radius_rows: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Terrain"),
            tile_extension: "stg".to_string(),
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            // WGS84
            equatorial_radius_m: 6_378_137.0,
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            radius_cols: 2,
            radius_rows: 2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|source| {
                ConfigError::ReadError {
                    path: config_path.clone(),
                    source,
                }
            })?;
            let config: Config = ron::from_str(&contents).map_err(|source| {
                ConfigError::ParseError {
                    path: config_path.clone(),
                    source,
                }
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| {
            ConfigError::WriteError {
                path: config_dir.to_path_buf(),
                source,
            }
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| {
            ConfigError::WriteError {
                path: config_path.clone(),
                source,
            }
        })?;
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`,
    /// `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ReadError {
                path: config_path.clone(),
                source,
            }
        })?;
        let new_config: Config = ron::from_str(&contents).map_err(|source| {
            ConfigError::ParseError {
                path: config_path.clone(),
                source,
            }
        })?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
