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

use crate::{gender::Gender, participant::Participant};

/// Exact number of men and women every team gets before the leftovers are
/// dealt.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TeamRequirements {
    #[serde(default)]
    pub men_per_team: usize,
    #[serde(default)]
    pub women_per_team: usize,
}

impl TeamRequirements {
    #[must_use]
    pub fn new(men_per_team: usize, women_per_team: usize) -> Self {
        Self {
            men_per_team,
            women_per_team,
        }
    }

    #[must_use]
    pub fn per_team(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.men_per_team,
            Gender::Female => self.women_per_team,
        }
    }

    /// Every gender whose quota can't be met by `participants`.
    ///
    /// The draw itself never fails on these, it hands out short quota slices.
    #[must_use]
    pub fn shortfalls(&self, participants: &[Participant], team_count: usize) -> Vec<Shortfall> {
        [Gender::Male, Gender::Female]
            .into_iter()
            .filter_map(|gender| {
                let needed = self.per_team(gender).saturating_mul(team_count);
                let available = participants
                    .iter()
                    .filter(|participant| participant.gender == gender)
                    .count();

                (needed > available).then_some(Shortfall {
                    gender,
                    needed,
                    available,
                })
            })
            .collect()
    }
}

impl fmt::Display for TeamRequirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} men and {} women per team",
            self.men_per_team, self.women_per_team
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shortfall {
    pub gender: Gender,
    pub needed: usize,
    pub available: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.gender {
            Gender::Male => "men",
            Gender::Female => "women",
        };

        write!(
            f,
            "not enough {who}: needed {}, available {}",
            self.needed, self.available
        )
    }
}
