use crate::core::{
    SceneOffset, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SCENE_RADIUS, EARTH_MEAN_RADIUS_KM,
    FALLBACK_SCENE_OFFSET,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Runtime parameters for tracking and projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Distance of the AR marker from the viewer (scene units)
    pub scene_radius: f32,
    /// Marker placement used until both observer and target are known
    pub fallback_offset: SceneOffset,
    /// Delay between target fetches (milliseconds)
    pub poll_interval_ms: u64,
    /// Spherical Earth radius for ground distance (km)
    pub earth_radius_km: f64,
    /// Altitudes above this are logged as suspicious (km)
    pub max_altitude_km: f64,
    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scene_radius: DEFAULT_SCENE_RADIUS,
            fallback_offset: FALLBACK_SCENE_OFFSET,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            earth_radius_km: EARTH_MEAN_RADIUS_KM,
            max_altitude_km: 2000.0,
            log_level: LogLevel::Info,
        }
    }
}

impl TrackerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn with_scene_radius(mut self, scene_radius: f32) -> Self {
        self.scene_radius = scene_radius;
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub fn with_fallback_offset(mut self, fallback_offset: SceneOffset) -> Self {
        self.fallback_offset = fallback_offset;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Check every parameter, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scene_radius.is_finite() && self.scene_radius > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "scene_radius".to_string(),
                value: self.scene_radius.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !self.fallback_offset.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "fallback_offset".to_string(),
                value: format!("{:?}", self.fallback_offset),
                reason: "components must be finite".to_string(),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "poll_interval_ms".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1 ms".to_string(),
            });
        }
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "earth_radius_km".to_string(),
                value: self.earth_radius_km.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !(self.max_altitude_km.is_finite() && self.max_altitude_km > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_altitude_km".to_string(),
                value: self.max_altitude_km.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        Ok(())
    }
}

/// Logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and info messages
    Info,
    /// All messages including debug
    Debug,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path}: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no file path set for saving configuration")]
    NoPath,
}

/// Holds the active configuration and where it came from
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: TrackerConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager and load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: TrackerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Serialization {
                path: path_str.clone(),
                source,
            })?;

        config.validate()?;

        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|source| ConfigError::Serialization {
                path: path_str.clone(),
                source,
            })?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was last loaded from or saved to
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::NoPath),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update the scene radius, returning the previous value
    pub fn set_scene_radius(&mut self, scene_radius: f32) -> Result<f32, ConfigError> {
        let candidate = self.config.clone().with_scene_radius(scene_radius);
        candidate.validate()?;

        let old_value = self.config.scene_radius;
        self.config = candidate;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update the polling interval, returning the previous value
    pub fn set_poll_interval_ms(&mut self, poll_interval_ms: u64) -> Result<u64, ConfigError> {
        let candidate = self.config.clone().with_poll_interval_ms(poll_interval_ms);
        candidate.validate()?;

        let old_value = self.config.poll_interval_ms;
        self.config = candidate;
        self.is_modified = true;
        Ok(old_value)
    }
}
