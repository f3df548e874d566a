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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{gender::Gender, skill::SkillLevel};

/// A person taking part in a draw.
///
/// Records saved before skill levels existed only carry a name and a gender,
/// they load with [`SkillLevel::Iniciante`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Participant {
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub skill_level: SkillLevel,
}

impl Participant {
    #[must_use]
    pub fn new(name: &str, gender: Gender, skill_level: SkillLevel) -> Self {
        Self {
            name: name.to_string(),
            gender,
            skill_level,
        }
    }

    /// The key used to detect duplicate names.
    #[must_use]
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

#[must_use]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.gender, self.skill_level)
    }
}
