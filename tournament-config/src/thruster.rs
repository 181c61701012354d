use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThrusterConfig {
    /// Force per unit of redstone power for a tier 1 thruster.
    pub speed: f64,
    /// Fraction of `speed` the tiny thruster produces.
    pub tiny_force_multiplier: f64,
    /// Highest tier an upgrade can bring a thruster to.
    pub max_tier: u8,
}

impl Default for ThrusterConfig {
    fn default() -> Self {
        Self {
            speed: 10000.0,
            tiny_force_multiplier: 0.2,
            max_tier: 4,
        }
    }
}

impl ThrusterConfig {
    pub fn tiny_speed(&self) -> f64 {
        self.speed * self.tiny_force_multiplier
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tier < 1 {
            return Err(ConfigError::Invalid("thruster.max_tier must be at least 1"));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(
                "thruster.speed must be a finite non-negative number",
            ));
        }
        if !self.tiny_force_multiplier.is_finite() || self.tiny_force_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "thruster.tiny_force_multiplier must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}
