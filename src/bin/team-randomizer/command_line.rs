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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use team_randomizer::{
    COPYRIGHT, LONG_VERSION,
    gender::Gender,
    skill::{SkillLevel, SkillStrategy},
    template::RECENT_TEMPLATES,
};

/// Team Randomizer
///
/// Keeps a list of participants and splits it into random teams, honoring
/// per team gender quotas and optional skill balancing. Everything is saved
/// between runs.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Split participants into random teams")]
pub(crate) struct Args {
    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Keep the saved data in this folder instead of the user data folder
    #[arg(long, value_name = "folder")]
    pub data_dir: Option<PathBuf>,

    /// Seed the random number generator to repeat a draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Add a participant
    Add {
        /// The participant's name, 2 to 50 characters
        name: String,

        /// male or female
        #[arg(long)]
        gender: Gender,

        /// iniciante, intermediario, avancado or profissional
        #[arg(default_value_t = SkillLevel::Iniciante, long)]
        skill: SkillLevel,
    },

    /// Remove the participant at the index shown by `list`
    Remove { index: usize },

    /// Show the participants and the current settings
    List,

    /// Remove every participant
    Clear,

    /// Delete the saved participants, settings and templates
    Reset,

    /// Set the number of teams
    Teams { count: usize },

    /// Set how many men and women every team must have, 0 and 0 for no quotas
    Quota {
        #[arg(default_value_t = 0, long)]
        men: usize,

        #[arg(default_value_t = 0, long)]
        women: usize,
    },

    /// Turn skill balancing on or off
    Skills {
        /// Turn skill balancing off
        #[arg(long)]
        off: bool,

        /// balanced, mixed or random
        #[arg(default_value_t = SkillStrategy::Balanced, long)]
        strategy: SkillStrategy,
    },

    /// Draw the teams and print them ready to paste
    ///
    /// Scores and skill levels are shown when skill balancing is on.
    Draw {
        /// Show each team's score and each participant's skill level
        #[arg(long, conflicts_with = "no_skills")]
        skills: bool,

        /// Leave the scores and skill levels out
        #[arg(long)]
        no_skills: bool,
    },

    /// Manage saved configurations
    #[command(subcommand)]
    Template(TemplateCommand),
}

#[derive(Subcommand, Debug)]
pub(crate) enum TemplateCommand {
    /// Save the current settings, replacing a template with the same name
    Save {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Apply a template's settings
    Load { template: String },

    /// Delete a template
    Delete { template: String },

    /// List every template
    List,

    /// List the templates loaded most recently
    Recent {
        #[arg(default_value_t = RECENT_TEMPLATES, long)]
        limit: usize,
    },
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("team-randomizer").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-19");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("team-randomizer.1", buffer)?;
        Ok(())
    }
}
