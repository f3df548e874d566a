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

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub const PARTICIPANTS_FILE: &str = "participants.ron";
pub const SETTINGS_FILE: &str = "settings.ron";
pub const TEMPLATES_FILE: &str = "templates.ron";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage: failed to serialize: {0}")]
    Serialize(#[from] ron::Error),
}

/// A folder of RON files, one per key.
#[derive(Clone, Debug)]
pub struct Store {
    folder: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn path(&self, file: &str) -> PathBuf {
        self.folder.join(file)
    }

    /// Loads `file`, falling back to `T::default()` when it is missing,
    /// unreadable, unparsable, or rejected by `valid`.
    ///
    /// Every fallback except a missing file is reported in the returned list.
    pub fn load_or_default<T, F>(&self, file: &str, valid: F) -> (T, Vec<String>)
    where
        T: DeserializeOwned + Default,
        F: Fn(&T) -> bool,
    {
        let path = self.path(file);
        let mut errors = Vec::new();

        let value = match fs::read_to_string(&path) {
            Ok(string) => match ron::from_str::<T>(&string) {
                Ok(value) if valid(&value) => value,
                Ok(_) => {
                    errors.push(format!(
                        "The saved data in {} is invalid, using the defaults.",
                        path.display()
                    ));
                    T::default()
                }
                Err(err) => {
                    errors.push(format!(
                        "Error parsing the ron file {}: {err}",
                        path.display()
                    ));
                    T::default()
                }
            },
            Err(err) => {
                if err.kind() == ErrorKind::NotFound {
                    debug!("{} doesn't exist yet", path.display());
                } else {
                    errors.push(format!("Error opening the file {}: {err}", path.display()));
                }
                T::default()
            }
        };

        for error in &errors {
            warn!("{error}");
        }

        (value, errors)
    }

    /// # Errors
    ///
    /// If the value can't be serialized or the file can't be written.
    pub fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.folder)?;

        let string = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
        fs::write(self.path(file), string)?;

        debug!("saved {}", self.path(file).display());
        Ok(())
    }

    /// Deletes `file`, a missing file is not an error.
    ///
    /// # Errors
    ///
    /// If the file exists and can't be removed.
    pub fn remove(&self, file: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(file)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
