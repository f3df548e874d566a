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

use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    requirements::TeamRequirements, skill::SkillBalanceConfig, template::TemplateConfig,
};

pub const TEAM_COUNTS: RangeInclusive<usize> = 2..=20;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SettingsError {
    #[error("teams: the number of teams must be between 2 and 20, not {0}")]
    TeamCount(usize),
    #[error("teams: {teams} teams is more than the {participants} participants")]
    MoreTeamsThanParticipants { teams: usize, participants: usize },
}

/// The draw configuration kept between runs.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settings {
    pub team_count: usize,
    #[serde(default)]
    pub requirements: TeamRequirements,
    #[serde(default)]
    pub skill_config: SkillBalanceConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            team_count: 2,
            requirements: TeamRequirements::default(),
            skill_config: SkillBalanceConfig::default(),
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// If `team_count` is out of range or larger than `participants`.
    pub fn set_team_count(
        &mut self,
        team_count: usize,
        participants: usize,
    ) -> Result<(), SettingsError> {
        if !TEAM_COUNTS.contains(&team_count) {
            return Err(SettingsError::TeamCount(team_count));
        }
        if team_count > participants {
            return Err(SettingsError::MoreTeamsThanParticipants {
                teams: team_count,
                participants,
            });
        }

        self.team_count = team_count;
        Ok(())
    }

    /// The quotas to draw with, `None` when both are zero.
    ///
    /// A zero quota deals everyone as a leftover which would skip skill
    /// balancing, so it is treated as no quota at all.
    #[must_use]
    pub fn requirements(&self) -> Option<&TeamRequirements> {
        (self.requirements != TeamRequirements::default()).then_some(&self.requirements)
    }

    #[must_use]
    pub fn template_config(&self) -> TemplateConfig {
        TemplateConfig {
            team_count: self.team_count,
            requirements: self.requirements().copied(),
            skill_config: Some(self.skill_config),
        }
    }

    pub fn apply(&mut self, config: &TemplateConfig) {
        self.team_count = config.team_count;
        self.requirements = config.requirements.unwrap_or_default();
        self.skill_config = config.skill_config.unwrap_or_default();
    }

    /// Fixes whatever a hand edited or outdated settings file got wrong.
    ///
    /// Returns a description of every field that was reset.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut problems = Vec::new();

        if !TEAM_COUNTS.contains(&self.team_count) {
            problems.push(SettingsError::TeamCount(self.team_count).to_string());
            self.team_count = Settings::default().team_count;
        }

        problems
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} teams", self.team_count)?;

        match self.requirements() {
            Some(requirements) => write!(f, ", {requirements}")?,
            None => write!(f, ", no quotas")?,
        }

        write!(f, ", skill balance {}", self.skill_config)
    }
}
