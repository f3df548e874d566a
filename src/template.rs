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

use chrono::{DateTime, Utc};
use log::info;
use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{requirements::TeamRequirements, skill::SkillBalanceConfig};

pub const RECENT_TEMPLATES: usize = 5;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum TemplateError {
    #[error("template: the name can't be empty")]
    EmptyName,
    #[error("template: there is no template with id {0}")]
    NotFound(String),
}

/// The part of a draw's configuration that a template stores.
///
/// `requirements: None` means no quotas.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TemplateConfig {
    pub team_count: usize,
    #[serde(default)]
    pub requirements: Option<TeamRequirements>,
    #[serde(default)]
    pub skill_config: Option<SkillBalanceConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub config: TemplateConfig,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {} teams", self.id, self.name, self.config.team_count)?;

        if let Some(requirements) = &self.config.requirements {
            write!(f, ", {requirements}")?;
        }
        if let Some(skill_config) = &self.config.skill_config {
            write!(f, ", skill balance {skill_config}")?;
        }
        if let Some(description) = &self.description {
            write!(f, " ({description})")?;
        }

        Ok(())
    }
}

fn new_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();

    format!("template-{}-{suffix}", now.timestamp_millis())
}

/// Saved configurations, in the order they were first saved.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Templates(pub Vec<Template>);

impl Templates {
    /// Saves `config` under `name`.
    ///
    /// A template whose name matches ignoring case is overwritten in place. It
    /// keeps its id and creation time but counts as never loaded again.
    ///
    /// # Errors
    ///
    /// If `name` is blank.
    pub fn save<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        config: TemplateConfig,
        description: Option<&str>,
        rng: &mut R,
    ) -> Result<&Template, TemplateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyName);
        }

        let now = Utc::now();
        let description = description
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .map(ToString::to_string);

        let key = name.to_lowercase();
        let index = if let Some(index) = self
            .0
            .iter()
            .position(|template| template.name.to_lowercase() == key)
        {
            let template = &mut self.0[index];
            template.name = name.to_string();
            template.description = description;
            template.config = config;
            template.last_used = None;
            info!("updated the template {} ({})", template.name, template.id);
            index
        } else {
            let template = Template {
                id: new_id(now, rng),
                name: name.to_string(),
                description,
                config,
                created_at: now,
                last_used: None,
            };
            info!("saved the template {} ({})", template.name, template.id);
            self.0.push(template);
            self.0.len() - 1
        };

        Ok(&self.0[index])
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.0.iter().find(|template| template.id == id)
    }

    /// Finds a template by id, or failing that by name ignoring case.
    #[must_use]
    pub fn find(&self, id_or_name: &str) -> Option<&Template> {
        let key = id_or_name.trim().to_lowercase();
        self.get(id_or_name)
            .or_else(|| self.0.iter().find(|template| template.name.to_lowercase() == key))
    }

    /// Returns the template's configuration and marks it as used now.
    ///
    /// # Errors
    ///
    /// If there is no template with `id`.
    pub fn load(&mut self, id: &str) -> Result<TemplateConfig, TemplateError> {
        let template = self
            .0
            .iter_mut()
            .find(|template| template.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        template.last_used = Some(Utc::now());
        Ok(template.config)
    }

    /// # Errors
    ///
    /// If there is no template with `id`.
    pub fn delete(&mut self, id: &str) -> Result<Template, TemplateError> {
        let index = self
            .0
            .iter()
            .position(|template| template.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        Ok(self.0.remove(index))
    }

    /// Up to `limit` templates that have been loaded, most recent first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&Template> {
        let mut used: Vec<&Template> = self
            .0
            .iter()
            .filter(|template| template.last_used.is_some())
            .collect();

        used.sort_by(|a, b| b.last_used.cmp(&a.last_used));
        used.truncate(limit);
        used
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0
            .iter()
            .all(|template| !template.id.is_empty() && !template.name.trim().is_empty())
    }
}
