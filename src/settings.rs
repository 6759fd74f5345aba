//! Session settings
//!
//! Loaded from a JSON file by the host; every field has a default so partial
//! files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PLAYFIELD_EXTENT, TICK_INTERVAL_MS};
use crate::error::Error;

/// Host/session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between scheduler ticks
    pub tick_interval_ms: u64,

    // === Playfield ===
    pub width: f32,
    pub height: f32,

    /// RNG seed for the run (host picks one when absent)
    pub seed: Option<u64>,

    // === Input ===
    /// Minimum ticks between accepted fire commands (0 = no limit)
    pub fire_cooldown_ticks: u64,

    // === Visual Effects ===
    /// Emit hit particles
    pub particles: bool,
    /// Start with the stats panel visible
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            width: 800.0,
            height: 600.0,
            seed: None,
            fire_cooldown_ticks: 0,
            particles: true,
            show_stats: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Reject settings the scheduler cannot run with
    ///
    /// A degenerate playfield is allowed: spawning simply never happens.
    pub fn validate(&self) -> Result<(), Error> {
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidSettings {
                reason: "tick_interval_ms must be greater than zero".to_string(),
            });
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidSettings {
                reason: format!("playfield {}x{} is not finite", self.width, self.height),
            });
        }
        if self.width > MAX_PLAYFIELD_EXTENT || self.height > MAX_PLAYFIELD_EXTENT {
            return Err(Error::InvalidSettings {
                reason: format!(
                    "playfield {}x{} exceeds {MAX_PLAYFIELD_EXTENT} per side",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }
}
