//! Engine configuration, provided by the scene driver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::effects::ParticleDefaults;

/// Configuration for the simulation and render passes.
/// Every field has a default, so partial JSON configs work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas width in world units.
    pub width: f32,
    /// Canvas height in world units. The reflection ground line is derived
    /// from this.
    pub height: f32,
    /// Default downward acceleration per tick (y-down world).
    pub gravity: f32,
    /// Default per-tick life multiplier for particles.
    pub decay_rate: f32,
    /// Default trail ring-buffer capacity.
    pub trail_capacity: usize,
    /// Visual radius of a rising shell.
    pub shell_radius: f32,
    /// Probability per tick that a rising shell bursts before apex.
    pub burst_chance: f32,
    /// Probability per tick that `auto_spawn` launches a shell.
    pub auto_spawn_probability: f32,
    /// `auto_spawn` stops launching at this many live shells.
    pub auto_spawn_cap: usize,
    /// Height of the near-ground band that casts reflections.
    pub reflection_band: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            gravity: 0.1,
            decay_rate: 0.97,
            trail_capacity: 10,
            shell_radius: 3.0,
            burst_chance: 0.02,
            auto_spawn_probability: 0.05,
            auto_spawn_cap: 10,
            reflection_band: 150.0,
        }
    }
}

/// Rejected configuration. The only failure path in the crate; everything
/// past construction is defensive clamping.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
    #[error("decay_rate must be in (0, 1), got {0}")]
    InvalidDecayRate(f32),
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },
    #[error("trail_capacity must be at least 1")]
    ZeroTrailCapacity,
    #[error("{name} must be non-negative and finite, got {value}")]
    InvalidScalar { name: &'static str, value: f32 },
    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Consume and return the config if valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.decay_rate > 0.0 && self.decay_rate < 1.0) {
            return Err(ConfigError::InvalidDecayRate(self.decay_rate));
        }
        for (name, value) in [
            ("burst_chance", self.burst_chance),
            ("auto_spawn_probability", self.auto_spawn_probability),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("shell_radius", self.shell_radius),
            ("reflection_band", self.reflection_band),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidScalar { name, value });
            }
        }
        Ok(())
    }

    /// The per-particle defaults burst patterns inherit.
    pub fn particle_defaults(&self) -> ParticleDefaults {
        ParticleDefaults {
            decay_rate: self.decay_rate,
            gravity: self.gravity,
            trail_capacity: self.trail_capacity,
        }
    }
}
