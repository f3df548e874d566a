// This file is part of team-randomizer.
//
// team-randomizer is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// team-randomizer is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four skill tiers, ordered from weakest to strongest.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Iniciante,
    Intermediario,
    Avancado,
    Profissional,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        Self::Iniciante,
        Self::Intermediario,
        Self::Avancado,
        Self::Profissional,
    ];

    /// The ordinal weight summed into a team's score.
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            Self::Iniciante => 1,
            Self::Intermediario => 2,
            Self::Avancado => 3,
            Self::Profissional => 4,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iniciante => write!(f, "iniciante"),
            Self::Intermediario => write!(f, "intermediario"),
            Self::Avancado => write!(f, "avancado"),
            Self::Profissional => write!(f, "profissional"),
        }
    }
}

impl FromStr for SkillLevel {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let string = string.trim().to_lowercase();

        match string.as_str() {
            "1" | "iniciante" | "beginner" => Ok(Self::Iniciante),
            "2" | "intermediario" | "intermediário" | "intermediate" => Ok(Self::Intermediario),
            "3" | "avancado" | "avançado" | "advanced" => Ok(Self::Avancado),
            "4" | "profissional" | "professional" => Ok(Self::Profissional),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a SkillLevel!"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStrategy {
    #[default]
    Balanced,
    Mixed,
    Random,
}

impl fmt::Display for SkillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::Mixed => write!(f, "mixed"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl FromStr for SkillStrategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.trim().to_lowercase().as_str() {
            "balanced" => Ok(Self::Balanced),
            "mixed" => Ok(Self::Mixed),
            "random" => Ok(Self::Random),
            s => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{s}' to a SkillStrategy!"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SkillBalanceConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: SkillStrategy,
}

impl SkillBalanceConfig {
    /// Whether the draw should spread each skill tier across the teams.
    ///
    /// `Mixed` and `Random` draw exactly like a disabled config.
    #[must_use]
    pub fn balances(&self) -> bool {
        self.enabled && self.strategy == SkillStrategy::Balanced
    }
}

impl fmt::Display for SkillBalanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "{}", self.strategy)
        } else {
            write!(f, "off")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_the_tier_order() {
        let weights: Vec<u32> = SkillLevel::ALL.iter().map(|skill| skill.weight()).collect();
        assert_eq!(weights, [1, 2, 3, 4]);
        assert!(SkillLevel::Iniciante < SkillLevel::Profissional);
    }

    #[test]
    fn parse_skill_level() -> anyhow::Result<()> {
        assert_eq!(SkillLevel::from_str("Avançado")?, SkillLevel::Avancado);
        assert_eq!(SkillLevel::from_str("4")?, SkillLevel::Profissional);
        assert!(SkillLevel::from_str("expert").is_err());

        Ok(())
    }

    #[test]
    fn only_enabled_balanced_balances() {
        let mut config = SkillBalanceConfig::default();
        assert!(!config.balances());

        config.enabled = true;
        assert!(config.balances());

        for strategy in [SkillStrategy::Mixed, SkillStrategy::Random] {
            config.strategy = strategy;
            assert!(!config.balances());
        }
    }
}
