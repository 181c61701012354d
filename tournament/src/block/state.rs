use serde::{Deserialize, Serialize};
use tournament_util::BlockDirection;

pub const MAX_POWER: u8 = 15;
pub const MIN_TIER: u8 = 1;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThrusterStateError {
    #[error("power {0} is above 15")]
    PowerOutOfRange(u8),
    #[error("tier must be at least 1")]
    TierTooLow,
}

/// Persisted block state of a thruster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredThrusterState")]
pub struct ThrusterState {
    pub facing: BlockDirection,
    pub power: u8,
    pub tier: u8,
}

impl Default for ThrusterState {
    fn default() -> Self {
        Self {
            facing: BlockDirection::North,
            power: 0,
            tier: MIN_TIER,
        }
    }
}

impl ThrusterState {
    pub fn new(facing: BlockDirection, power: u8, tier: u8) -> Result<Self, ThrusterStateError> {
        if power > MAX_POWER {
            return Err(ThrusterStateError::PowerOutOfRange(power));
        }
        if tier < MIN_TIER {
            return Err(ThrusterStateError::TierTooLow);
        }
        Ok(Self {
            facing,
            power,
            tier,
        })
    }

    #[must_use]
    pub fn with_facing(self, facing: BlockDirection) -> Self {
        Self { facing, ..self }
    }

    /// Signals above [`MAX_POWER`] are clamped.
    #[must_use]
    pub fn with_power(self, power: u8) -> Self {
        Self {
            power: power.min(MAX_POWER),
            ..self
        }
    }

    #[must_use]
    pub fn with_tier(self, tier: u8) -> Self {
        Self {
            tier: tier.max(MIN_TIER),
            ..self
        }
    }

    pub fn is_powered(&self) -> bool {
        self.power > 0
    }
}

#[derive(Deserialize)]
struct StoredThrusterState {
    facing: BlockDirection,
    power: u8,
    tier: u8,
}

impl TryFrom<StoredThrusterState> for ThrusterState {
    type Error = ThrusterStateError;

    fn try_from(stored: StoredThrusterState) -> Result<Self, Self::Error> {
        Self::new(stored.facing, stored.power, stored.tier)
    }
}
