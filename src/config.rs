// config.rs - Scene tuning handed over by the page
//
// Only presentation and pacing knobs live here. The trip / sit / cry
// thresholds are constants in `sim::pig`.

use serde::Deserialize;

/// Tuning for one mounted animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Distance from the bottom of the surface to the floor line
    pub ground_offset: f32,
    /// Base walking speed in units/frame
    pub walk_speed: f32,
    /// Frames between coin spawn attempts
    pub spawn_every: u32,
    /// Draw scale of the pig
    pub pig_scale: f32,
    /// Draw scale of a coin
    pub coin_scale: f32,
    /// Coin radius before scaling
    pub coin_size: f32,
    /// xorshift seed, must be non-zero
    pub seed: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_offset: 60.0,
            walk_speed: 0.7,
            spawn_every: 50,
            pig_scale: 0.84,
            coin_scale: 0.8,
            coin_size: 14.0,
            seed: 0xDEADBEEF,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON object; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_every == 0 {
            return Err(ConfigError::Invalid("spawn_every must be at least 1".into()));
        }
        if self.seed == 0 {
            return Err(ConfigError::Invalid("seed must be non-zero".into()));
        }
        let positive = [
            ("walk_speed", self.walk_speed),
            ("pig_scale", self.pig_scale),
            ("coin_scale", self.coin_scale),
            ("coin_size", self.coin_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.ground_offset.is_finite() {
            return Err(ConfigError::Invalid("ground_offset must be finite".into()));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}
