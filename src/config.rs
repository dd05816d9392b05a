//! Simulation tuning
//!
//! Loaded from JSON; any field left out falls back to the values in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// How a hit normal is normalized before the glide decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NormalMode {
    /// Unit length over all three axes
    #[default]
    Full,
    /// Unit length over x/y only; z keeps the raw face-area scale
    Planar,
}

impl NormalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalMode::Full => "full",
            NormalMode::Planar => "planar",
        }
    }
}

/// Player controller tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Acceleration per held direction (units/s²)
    pub acceleration: f32,
    /// Speed cap (units/s)
    pub max_speed: f32,
    /// Deceleration when a direction is released (units/s²)
    pub skid: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            acceleration: PLAYER_ACCELERATION,
            max_speed: PLAYER_MAX_SPEED,
            skid: PLAYER_SKID,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Upper bound on a frame's time step (seconds)
    pub max_frame_dt: f32,
    /// Resolver passes per entity per frame
    pub collision_iterations: u32,
    /// Distance kept from a wall after contact
    pub contact_back_off: f32,
    /// Sweeps this close to parallel with a face are ignored
    pub parallel_epsilon: f32,
    pub normal_mode: NormalMode,
    pub player: PlayerTuning,
    /// Camera offset above the player along z
    pub camera_height: f32,
    /// Size of the scratch region handed to the world
    pub scratch_bytes: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: MAX_FRAME_DT,
            collision_iterations: COLLISION_ITERATIONS,
            contact_back_off: CONTACT_BACK_OFF,
            parallel_epsilon: PARALLEL_EPSILON,
            normal_mode: NormalMode::Full,
            player: PlayerTuning::default(),
            camera_height: CAMERA_HEIGHT,
            scratch_bytes: SCRATCH_BYTES,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !(self.max_frame_dt > 0.0) {
            return invalid("max_frame_dt", "must be positive");
        }
        if self.collision_iterations == 0 {
            return invalid("collision_iterations", "must be at least 1");
        }
        if !(self.contact_back_off >= 0.0) {
            return invalid("contact_back_off", "must not be negative");
        }
        if !(self.parallel_epsilon >= 0.0) {
            return invalid("parallel_epsilon", "must not be negative");
        }
        if !(self.player.max_speed > 0.0) {
            return invalid("player.max_speed", "must be positive");
        }
        if self.player.acceleration < 0.0 || self.player.skid < 0.0 {
            return invalid("player", "acceleration and skid must not be negative");
        }
        Ok(())
    }
}
