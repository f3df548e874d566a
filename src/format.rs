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

use std::fmt::Write as _;

use crate::{gender::Gender, participant::Participant, teams::team_skill_score};

/// Renders `teams` as the text that goes on the clipboard.
///
/// ```text
/// Time 1:
/// Homens:
/// - Bob
/// Mulheres:
/// - Carol
/// ```
///
/// Teams are joined by a blank line and a gender block is left out when the
/// team has nobody of that gender. The men block always ends in a newline, the
/// women block never does. With `include_skills` the header carries the team's
/// skill score and every line the participant's skill level.
#[must_use]
pub fn format_teams_for_clipboard<T: AsRef<[Participant]>>(
    teams: &[T],
    include_skills: bool,
) -> String {
    teams
        .iter()
        .enumerate()
        .map(|(index, team)| format_team(index, team.as_ref(), include_skills))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_team(index: usize, team: &[Participant], include_skills: bool) -> String {
    let mut text = format!("Time {}", index + 1);
    if include_skills {
        let _ = write!(text, " (Pontuação: {})", team_skill_score(team));
    }
    text.push_str(":\n");

    let block = |gender: Gender| -> Vec<String> {
        team.iter()
            .filter(|participant| participant.gender == gender)
            .map(|participant| format_participant(participant, include_skills))
            .collect()
    };

    let men = block(Gender::Male);
    if !men.is_empty() {
        let _ = writeln!(text, "{}:\n{}", Gender::Male.heading(), men.join("\n"));
    }

    let women = block(Gender::Female);
    if !women.is_empty() {
        let _ = write!(text, "{}:\n{}", Gender::Female.heading(), women.join("\n"));
    }

    text
}

fn format_participant(participant: &Participant, include_skills: bool) -> String {
    if include_skills {
        format!("- {} ({})", participant.name, participant.skill_level)
    } else {
        format!("- {}", participant.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::skill::SkillLevel;

    use super::*;

    fn person(name: &str, gender: Gender, skill_level: SkillLevel) -> Participant {
        Participant::new(name, gender, skill_level)
    }

    fn teams() -> Vec<Vec<Participant>> {
        vec![
            vec![
                person("Alice", Gender::Female, SkillLevel::Avancado),
                person("Bob", Gender::Male, SkillLevel::Iniciante),
                person("Ed", Gender::Male, SkillLevel::Profissional),
            ],
            vec![person("Carol", Gender::Female, SkillLevel::Intermediario)],
        ]
    }

    #[test]
    fn without_skills() {
        assert_eq!(
            format_teams_for_clipboard(&teams(), false),
            "Time 1:\nHomens:\n- Bob\n- Ed\nMulheres:\n- Alice\n\nTime 2:\nMulheres:\n- Carol"
        );
    }

    #[test]
    fn with_skills() {
        assert_eq!(
            format_teams_for_clipboard(&teams(), true),
            "Time 1 (Pontuação: 8):\nHomens:\n- Bob (iniciante)\n- Ed (profissional)\nMulheres:\n- Alice (avancado)\n\nTime 2 (Pontuação: 2):\nMulheres:\n- Carol (intermediario)"
        );
    }

    #[test]
    fn men_only_team_keeps_its_trailing_newline() {
        let teams = vec![
            vec![person("Bob", Gender::Male, SkillLevel::Iniciante)],
            vec![person("Dave", Gender::Male, SkillLevel::Iniciante)],
        ];

        assert_eq!(
            format_teams_for_clipboard(&teams, false),
            "Time 1:\nHomens:\n- Bob\n\n\nTime 2:\nHomens:\n- Dave\n"
        );
    }

    #[test]
    fn empty_team_is_only_a_header() {
        let teams: Vec<Vec<Participant>> = vec![Vec::new()];
        assert_eq!(format_teams_for_clipboard(&teams, true), "Time 1 (Pontuação: 0):\n");
        assert_eq!(format_teams_for_clipboard::<Vec<Participant>>(&[], false), "");
    }

    #[test]
    fn formatting_is_pure() {
        let teams = teams();
        assert_eq!(
            format_teams_for_clipboard(&teams, true),
            format_teams_for_clipboard(&teams, true)
        );
    }
}
