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
use thiserror::Error;

use crate::{
    MAX_NAME_LENGTH, MAX_PARTICIPANTS, MIN_NAME_LENGTH,
    gender::Gender,
    participant::{Participant, name_key},
    skill::SkillLevel,
};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RosterError {
    #[error("add: the name must have at least {} characters", MIN_NAME_LENGTH)]
    NameTooShort,
    #[error("add: the name must have at most {} characters", MAX_NAME_LENGTH)]
    NameTooLong,
    #[error("add: \"{0}\" is already on the list")]
    Duplicate(String),
    #[error("add: at most {} participants are allowed", MAX_PARTICIPANTS)]
    Full,
    #[error("remove: there is no participant number {0}")]
    IndexOutOfRange(usize),
}

/// The list of participants as the user builds it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster(pub Vec<Participant>);

impl Roster {
    /// Adds a participant with a trimmed name.
    ///
    /// # Errors
    ///
    /// If the name is too short, too long, or already taken (ignoring case),
    /// or if the roster is full.
    pub fn add(
        &mut self,
        name: &str,
        gender: Gender,
        skill_level: SkillLevel,
    ) -> Result<&Participant, RosterError> {
        let name = name.trim();
        let length = name.chars().count();

        if length < MIN_NAME_LENGTH {
            return Err(RosterError::NameTooShort);
        }
        if length > MAX_NAME_LENGTH {
            return Err(RosterError::NameTooLong);
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        if self.0.len() >= MAX_PARTICIPANTS {
            return Err(RosterError::Full);
        }

        self.0.push(Participant::new(name, gender, skill_level));
        Ok(&self.0[self.0.len() - 1])
    }

    /// # Errors
    ///
    /// If `index` is past the end of the list.
    pub fn remove(&mut self, index: usize) -> Result<Participant, RosterError> {
        if index >= self.0.len() {
            return Err(RosterError::IndexOutOfRange(index));
        }

        Ok(self.0.remove(index))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = name_key(name);
        self.0.iter().any(|participant| participant.name_key() == key)
    }

    #[must_use]
    pub fn count(&self, gender: Gender) -> usize {
        self.0
            .iter()
            .filter(|participant| participant.gender == gender)
            .count()
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether the stored list is usable as it is.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut roster = Roster::default();
        self.0.iter().all(|participant| {
            roster
                .add(&participant.name, participant.gender, participant.skill_level)
                .is_ok()
        })
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, participant) in self.0.iter().enumerate() {
            writeln!(f, "{index:>3}. {participant}")?;
        }

        write!(
            f,
            "{} participants: {} men, {} women",
            self.len(),
            self.count(Gender::Male),
            self.count(Gender::Female)
        )
    }
}
