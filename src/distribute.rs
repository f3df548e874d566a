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

use std::collections::BTreeMap;

use rand::Rng;

use crate::{participant::Participant, shuffle::shuffle, skill::SkillLevel, teams::Team};

fn group_by_skill(participants: &[Participant]) -> BTreeMap<SkillLevel, Vec<Participant>> {
    participants
        .iter()
        .fold(BTreeMap::new(), |mut groups, participant| {
            groups
                .entry(participant.skill_level)
                .or_insert_with(Vec::new)
                .push(participant.clone());
            groups
        })
}

/// Spreads every skill tier round-robin over `team_count` teams.
///
/// Each tier is shuffled on its own and dealt starting from team 0, so a team
/// gets either the floor or the ceiling of `tier size / team_count` from every
/// tier. Tiers are never mixed.
///
/// With no teams there is nowhere to deal to and the result is empty.
#[must_use]
pub fn distribute_by_skill<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    rng: &mut R,
) -> Vec<Team> {
    if team_count == 0 {
        return Vec::new();
    }

    let mut teams: Vec<Team> = vec![Vec::new(); team_count];

    for (skill, group) in group_by_skill(participants) {
        log::trace!("dealing {} participants at skill {skill}", group.len());

        for (index, participant) in shuffle(&group, rng).into_iter().enumerate() {
            teams[index % team_count].push(participant);
        }
    }

    teams
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::gender::Gender;

    use super::*;

    fn participant(name: &str, skill_level: SkillLevel) -> Participant {
        Participant::new(name, Gender::Male, skill_level)
    }

    #[test]
    fn one_tier_splits_evenly() {
        let mut rng = StdRng::seed_from_u64(3);
        let participants: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|name| participant(name, SkillLevel::Iniciante))
            .collect();

        let teams = distribute_by_skill(&participants, 2, &mut rng);

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|team| team.len() == 2));
    }

    #[test]
    fn every_tier_is_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut participants = Vec::new();
        for (i, skill) in SkillLevel::ALL.iter().enumerate() {
            for j in 0..3 {
                participants.push(participant(&format!("{i}-{j}"), *skill));
            }
        }

        let teams = distribute_by_skill(&participants, 3, &mut rng);

        for team in &teams {
            for skill in SkillLevel::ALL {
                let count = team.iter().filter(|p| p.skill_level == skill).count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn uneven_tier_differs_by_at_most_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let participants: Vec<_> = (0..7)
            .map(|i| participant(&i.to_string(), SkillLevel::Avancado))
            .collect();

        let teams = distribute_by_skill(&participants, 3, &mut rng);
        let mut sizes: Vec<usize> = teams.iter().map(Vec::len).collect();
        sizes.sort_unstable();

        assert_eq!(sizes, [2, 2, 3]);
    }

    #[test]
    fn zero_teams_is_empty() {
        let mut rng = StdRng::seed_from_u64(9);
        let participants = vec![participant("solo", SkillLevel::Profissional)];

        assert!(distribute_by_skill(&participants, 0, &mut rng).is_empty());
    }

    #[test]
    fn more_teams_than_people_leaves_empty_teams() {
        let mut rng = StdRng::seed_from_u64(9);
        let participants = vec![participant("solo", SkillLevel::Profissional)];

        let teams = distribute_by_skill(&participants, 4, &mut rng);

        assert_eq!(teams.len(), 4);
        assert_eq!(teams.iter().map(Vec::len).sum::<usize>(), 1);
    }
}
