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

mod command_line;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use team_randomizer::{
    format::format_teams_for_clipboard,
    roster::Roster,
    settings::Settings,
    storage::{PARTICIPANTS_FILE, SETTINGS_FILE, Store, TEMPLATES_FILE},
    teams::generate_teams,
    template::{Template, Templates},
    utils,
};

use crate::command_line::{Args, Command, TemplateCommand};

/// Everything saved between runs.
struct State {
    store: Store,
    roster: Roster,
    settings: Settings,
    templates: Templates,
}

impl State {
    fn load(store: Store) -> Self {
        let (roster, _) = store.load_or_default(PARTICIPANTS_FILE, Roster::is_valid);
        let (mut settings, _) = store.load_or_default::<Settings, _>(SETTINGS_FILE, |_| true);
        let (templates, _) = store.load_or_default(TEMPLATES_FILE, Templates::is_valid);

        for problem in settings.sanitize() {
            warn!("{problem}");
        }

        Self {
            store,
            roster,
            settings,
            templates,
        }
    }

    fn save_roster(&self) -> anyhow::Result<()> {
        self.store
            .save(PARTICIPANTS_FILE, &self.roster)
            .context("saving the participants")
    }

    fn save_settings(&self) -> anyhow::Result<()> {
        self.store
            .save(SETTINGS_FILE, &self.settings)
            .context("saving the settings")
    }

    fn save_templates(&self) -> anyhow::Result<()> {
        self.store
            .save(TEMPLATES_FILE, &self.templates)
            .context("saving the templates")
    }

    fn find_template(&self, id_or_name: &str) -> anyhow::Result<Template> {
        self.templates
            .find(id_or_name)
            .cloned()
            .ok_or_else(|| anyhow::Error::msg(format!("there is no template {id_or_name}")))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    run(args, &mut io::stdout().lock())
}

/// Runs one command, writing what it prints to `out`.
fn run<W: Write>(args: Args, out: &mut W) -> anyhow::Result<()> {
    if args.man {
        return Args::generate_man_page();
    }

    let folder = match args.data_dir {
        Some(folder) => folder,
        None => utils::create_data_folder()?,
    };
    debug!("using the data folder {}", folder.display());

    let mut state = State::load(Store::new(folder));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match args.command.unwrap_or(Command::List) {
        Command::Add {
            name,
            gender,
            skill,
        } => {
            let participant = state.roster.add(&name, gender, skill)?;
            info!("added {participant}");
            state.save_roster()?;
        }
        Command::Remove { index } => {
            let participant = state.roster.remove(index)?;
            info!("removed {participant}");
            state.save_roster()?;
        }
        Command::List => {
            writeln!(out, "{}", state.roster)?;
            writeln!(out, "{}", state.settings)?;
        }
        Command::Clear => {
            state.roster.clear();
            state.save_roster()?;
        }
        Command::Reset => {
            for file in [PARTICIPANTS_FILE, SETTINGS_FILE, TEMPLATES_FILE] {
                state
                    .store
                    .remove(file)
                    .with_context(|| format!("removing {file}"))?;
            }
            info!("removed the saved data in {}", state.store.folder().display());
        }
        Command::Teams { count } => {
            state
                .settings
                .set_team_count(count, state.roster.len())?;
            state.save_settings()?;
        }
        Command::Quota { men, women } => {
            state.settings.requirements.men_per_team = men;
            state.settings.requirements.women_per_team = women;

            for shortfall in state
                .settings
                .requirements
                .shortfalls(state.roster.participants(), state.settings.team_count)
            {
                warn!("{shortfall}");
            }
            state.save_settings()?;
        }
        Command::Skills { off, strategy } => {
            state.settings.skill_config.enabled = !off;
            state.settings.skill_config.strategy = strategy;
            state.save_settings()?;
        }
        Command::Draw { skills, no_skills } => {
            let participants = state.roster.participants();
            if participants.len() < 2 {
                return Err(anyhow::Error::msg(
                    "draw: at least 2 participants are needed to draw teams",
                ));
            }

            let settings = &state.settings;
            if let Some(requirements) = settings.requirements() {
                for shortfall in requirements.shortfalls(participants, settings.team_count) {
                    warn!("{shortfall}");
                }
            }

            let teams = generate_teams(
                participants,
                settings.team_count,
                settings.requirements(),
                Some(&settings.skill_config),
                &mut rng,
            )?;

            let include_skills = skills || (settings.skill_config.enabled && !no_skills);
            writeln!(out, "{}", format_teams_for_clipboard(&teams, include_skills))?;
        }
        Command::Template(command) => template(&mut state, command, &mut rng, out)?,
    }

    Ok(())
}

fn template<W: Write>(
    state: &mut State,
    command: TemplateCommand,
    rng: &mut StdRng,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        TemplateCommand::Save { name, description } => {
            let config = state.settings.template_config();
            let template = state
                .templates
                .save(&name, config, description.as_deref(), rng)?;
            writeln!(out, "{template}")?;
            state.save_templates()?;
        }
        TemplateCommand::Load { template } => {
            let template = state.find_template(&template)?;
            let config = state.templates.load(&template.id)?;

            state.settings.apply(&config);
            for problem in state.settings.sanitize() {
                warn!("{problem}");
            }

            writeln!(out, "{}", state.settings)?;
            state.save_settings()?;
            state.save_templates()?;
        }
        TemplateCommand::Delete { template } => {
            let template = state.find_template(&template)?;
            state.templates.delete(&template.id)?;
            info!("deleted the template {}", template.name);
            state.save_templates()?;
        }
        TemplateCommand::List => {
            for template in &state.templates.0 {
                writeln!(out, "{template}")?;
            }
        }
        TemplateCommand::Recent { limit } => {
            for template in state.templates.recent(limit) {
                writeln!(out, "{template}")?;
            }
        }
    }

    Ok(())
}
