use std::{collections::BTreeMap, env, fs, path::PathBuf, process};

use rand::{SeedableRng, rngs::StdRng};

use team_randomizer::{
    format::format_teams_for_clipboard,
    gender::Gender,
    participant::Participant,
    requirements::TeamRequirements,
    roster::Roster,
    settings::Settings,
    skill::{SkillBalanceConfig, SkillLevel, SkillStrategy},
    storage::{SETTINGS_FILE, Store, TEMPLATES_FILE},
    teams::{Team, generate_teams},
    template::{RECENT_TEMPLATES, Templates},
};

const BALANCED: SkillBalanceConfig = SkillBalanceConfig {
    enabled: true,
    strategy: SkillStrategy::Balanced,
};

/// # Errors
///
/// If the fixture is not valid csv or a participant is rejected.
fn roster() -> anyhow::Result<Roster> {
    let participants_csv = include_str!("participants.csv");
    let mut reader = csv::Reader::from_reader(participants_csv.as_bytes());
    let mut roster = Roster::default();

    for record in reader.deserialize() {
        let participant: Participant = record?;
        roster.add(&participant.name, participant.gender, participant.skill_level)?;
    }

    Ok(roster)
}

fn count(team: &[Participant], gender: Gender) -> usize {
    team.iter().filter(|p| p.gender == gender).count()
}

fn assert_everyone_once(roster: &Roster, teams: &[Team]) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for participant in teams.iter().flatten() {
        *seen.entry(participant.name.as_str()).or_default() += 1;
    }

    assert_eq!(seen.len(), roster.len());
    assert!(seen.values().all(|times| *times == 1));
    for participant in roster.participants() {
        assert!(seen.contains_key(participant.name.as_str()));
    }
}

#[test]
fn fixture_loads() -> anyhow::Result<()> {
    let roster = roster()?;

    assert_eq!(roster.len(), 18);
    assert_eq!(roster.count(Gender::Male), 9);
    assert_eq!(roster.count(Gender::Female), 9);

    Ok(())
}

#[test]
fn full_quotas() -> anyhow::Result<()> {
    let roster = roster()?;
    let requirements = TeamRequirements::new(3, 3);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        for config in [None, Some(&BALANCED)] {
            let teams = generate_teams(
                roster.participants(),
                3,
                Some(&requirements),
                config,
                &mut rng,
            )?;

            assert_everyone_once(&roster, &teams);
            for team in &teams {
                assert_eq!(count(team, Gender::Male), 3);
                assert_eq!(count(team, Gender::Female), 3);
            }
        }
    }

    Ok(())
}

#[test]
fn quotas_with_leftovers() -> anyhow::Result<()> {
    let roster = roster()?;
    let requirements = TeamRequirements::new(2, 2);
    assert!(requirements.shortfalls(roster.participants(), 3).is_empty());

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let teams = generate_teams(roster.participants(), 3, Some(&requirements), None, &mut rng)?;

        assert_everyone_once(&roster, &teams);
        for team in &teams {
            assert_eq!(team.len(), 6);
            assert!(count(team, Gender::Male) >= 2);
            assert!(count(team, Gender::Female) >= 2);
        }
    }

    Ok(())
}

#[test]
fn unsatisfiable_quotas_still_draw() -> anyhow::Result<()> {
    let roster = roster()?;
    let requirements = TeamRequirements::new(4, 1);

    let shortfalls = requirements.shortfalls(roster.participants(), 3);
    assert_eq!(shortfalls.len(), 1);
    assert_eq!(shortfalls[0].gender, Gender::Male);
    assert_eq!(shortfalls[0].needed, 12);
    assert_eq!(shortfalls[0].available, 9);

    let mut rng = StdRng::seed_from_u64(77);
    let teams = generate_teams(roster.participants(), 3, Some(&requirements), None, &mut rng)?;

    assert_everyone_once(&roster, &teams);
    assert_eq!(count(&teams[0], Gender::Male), 4);
    assert_eq!(count(&teams[1], Gender::Male), 4);
    assert_eq!(count(&teams[2], Gender::Male), 1);

    Ok(())
}

#[test]
fn balanced_tiers_without_quotas() -> anyhow::Result<()> {
    let roster = roster()?;

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let teams = generate_teams(roster.participants(), 4, None, Some(&BALANCED), &mut rng)?;

        assert_eq!(teams.len(), 4);
        assert_everyone_once(&roster, &teams);

        for skill in SkillLevel::ALL {
            let per_team: Vec<usize> = teams
                .iter()
                .map(|team| team.iter().filter(|p| p.skill_level == skill).count())
                .collect();

            let (Some(min), Some(max)) = (per_team.iter().min(), per_team.iter().max()) else {
                unreachable!("there are four teams");
            };
            assert!(max - min <= 1, "{skill}: {per_team:?}");
        }
    }

    Ok(())
}

#[test]
fn a_seed_repeats_the_draw() -> anyhow::Result<()> {
    let roster = roster()?;
    let requirements = TeamRequirements::new(1, 2);

    let draw = |seed| -> anyhow::Result<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        let teams = generate_teams(
            roster.participants(),
            3,
            Some(&requirements),
            Some(&BALANCED),
            &mut rng,
        )?;
        Ok(format_teams_for_clipboard(&teams, true))
    };

    assert_eq!(draw(5)?, draw(5)?);
    assert!(draw(5)?.starts_with("Time 1 (Pontuação: "));

    Ok(())
}

struct TempFolder(PathBuf);

impl Drop for TempFolder {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn templates_survive_a_restart() -> anyhow::Result<()> {
    let folder = TempFolder(env::temp_dir().join(format!("team-randomizer-it-{}", process::id())));
    let store = Store::new(folder.0.clone());
    let mut rng = StdRng::seed_from_u64(1);

    let mut settings = Settings::default();
    settings.set_team_count(4, 18)?;
    settings.requirements = TeamRequirements::new(2, 2);
    settings.skill_config = BALANCED;

    let mut templates = Templates::default();
    let id = templates
        .save("Futsal de quinta", settings.template_config(), Some("quadra 2"), &mut rng)?
        .id
        .clone();
    store.save(TEMPLATES_FILE, &templates)?;
    store.save(SETTINGS_FILE, &Settings::default())?;

    let (mut templates, errors): (Templates, _) =
        store.load_or_default(TEMPLATES_FILE, Templates::is_valid);
    assert!(errors.is_empty());

    let (mut restored, _): (Settings, _) = store.load_or_default(SETTINGS_FILE, |_| true);
    assert_eq!(restored, Settings::default());

    restored.apply(&templates.load(&id)?);
    assert_eq!(restored, settings);
    assert_eq!(templates.recent(RECENT_TEMPLATES).len(), 1);

    Ok(())
}
