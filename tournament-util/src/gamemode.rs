use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
pub struct ParseGameModeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// Creative players place and upgrade without spending items.
    #[must_use]
    pub const fn consumes_items(self) -> bool {
        !matches!(self, Self::Creative)
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "survival" => Ok(Self::Survival),
            "creative" => Ok(Self::Creative),
            "adventure" => Ok(Self::Adventure),
            "spectator" => Ok(Self::Spectator),
            _ => Err(ParseGameModeError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GameMode;

    #[test]
    fn only_creative_is_exempt() {
        assert!(GameMode::Survival.consumes_items());
        assert!(GameMode::Adventure.consumes_items());
        assert!(!GameMode::Creative.consumes_items());
        assert_eq!("creative".parse(), Ok(GameMode::Creative));
    }
}
