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

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    distribute::distribute_by_skill, gender::Gender, participant::Participant,
    requirements::TeamRequirements, shuffle::shuffle, skill::SkillBalanceConfig,
};

pub type Team = Vec<Participant>;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum DrawError {
    #[error(
        "draw: the number of participants ({participants}) must be at least the number of teams ({teams}) and there must be at least one team"
    )]
    InvalidConfiguration { participants: usize, teams: usize },
}

/// Splits `participants` into `team_count` teams.
///
/// Without `requirements` everyone is dealt round-robin after a shuffle, or
/// tier by tier when `skill_config` asks for balancing. With `requirements`
/// every team first takes its men and women quota slices, then the people left
/// over are shuffled together and dealt round-robin.
///
/// Quotas that can't be met are not an error: the slices come up short and
/// nobody is lost. Check [`TeamRequirements::shortfalls`] beforehand to warn.
///
/// # Errors
///
/// If there are no teams or fewer participants than teams.
pub fn generate_teams<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    requirements: Option<&TeamRequirements>,
    skill_config: Option<&SkillBalanceConfig>,
    rng: &mut R,
) -> Result<Vec<Team>, DrawError> {
    if team_count == 0 || participants.len() < team_count {
        return Err(DrawError::InvalidConfiguration {
            participants: participants.len(),
            teams: team_count,
        });
    }

    let balance = skill_config.is_some_and(SkillBalanceConfig::balances);
    debug!(
        "drawing {} participants into {team_count} teams, requirements: {requirements:?}, skill balance: {balance}",
        participants.len()
    );

    let Some(requirements) = requirements else {
        if balance {
            return Ok(distribute_by_skill(participants, team_count, rng));
        }

        let mut teams: Vec<Team> = vec![Vec::new(); team_count];
        deal(&mut teams, shuffle(participants, rng));
        return Ok(teams);
    };

    let (men, women): (Vec<Participant>, Vec<Participant>) = participants
        .iter()
        .cloned()
        .partition(|participant| participant.gender == Gender::Male);

    let (men, women) = if balance {
        (
            distribute_by_skill(&men, team_count, rng).concat(),
            distribute_by_skill(&women, team_count, rng).concat(),
        )
    } else {
        (shuffle(&men, rng), shuffle(&women, rng))
    };

    let mut teams: Vec<Team> = vec![Vec::new(); team_count];
    let men_left = take_quota(&mut teams, &men, requirements.men_per_team);
    let women_left = take_quota(&mut teams, &women, requirements.women_per_team);

    let leftovers = [men_left, women_left].concat();
    if !leftovers.is_empty() {
        debug!("dealing {} leftover participants", leftovers.len());
    }
    deal(&mut teams, shuffle(&leftovers, rng));

    Ok(teams)
}

/// Hands team `i` the slice `[i * per_team, (i + 1) * per_team)` and returns
/// whatever is past the last slice.
fn take_quota<'a>(
    teams: &mut [Team],
    people: &'a [Participant],
    per_team: usize,
) -> &'a [Participant] {
    for (i, team) in teams.iter_mut().enumerate() {
        let start = i.saturating_mul(per_team).min(people.len());
        let end = start.saturating_add(per_team).min(people.len());
        team.extend_from_slice(&people[start..end]);
    }

    let needed = per_team.saturating_mul(teams.len()).min(people.len());
    &people[needed..]
}

fn deal(teams: &mut [Team], people: Vec<Participant>) {
    let team_count = teams.len();
    for (index, participant) in people.into_iter().enumerate() {
        teams[index % team_count].push(participant);
    }
}

/// The sum of the skill weights of everyone on `team`.
#[must_use]
pub fn team_skill_score(team: &[Participant]) -> u32 {
    team.iter()
        .map(|participant| participant.skill_level.weight())
        .sum()
}
