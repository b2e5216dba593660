//! Reading and writing the train list file.

use serde_json::Value;

use std::fmt;
use std::path::{Path, PathBuf};

use utils::data::data_serialize::{self, SaveToFileError};

use crate::schema::{Validate, ValidationError};
use crate::train::Train;

#[derive(Debug)]
pub enum StoreError {
    Reading(PathBuf, std::io::Error),
    Parsing(PathBuf, serde_json::Error),
    Invalid(PathBuf, ValidationError),
    Saving(PathBuf, SaveToFileError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading(path, e) => write!(fmt, "Failed to load {}: {}", path.display(), e),
            Self::Parsing(path, e) => write!(fmt, "Failed to parse {}: {}", path.display(), e),
            Self::Invalid(path, e) => write!(fmt, "Failed to load {}: {}", path.display(), e),
            Self::Saving(path, e) => write!(fmt, "Failed to save {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for StoreError {}

/// The train list file, checked by `V` every time it's read.
pub struct Store<V> {
    path: PathBuf,
    validator: V,
}

impl<V: Validate> Store<V> {
    pub fn new<P: Into<PathBuf>>(path: P, validator: V) -> Self {
        Self {
            path: path.into(),
            validator,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every train from the file.
    ///
    /// A file that doesn't exist yet is an empty list, and the validator isn't consulted.
    pub fn load(&self) -> Result<Vec<Train>, StoreError> {
        let contents = match utils::io::read_if_exists(&self.path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                log::info!("{} doesn't exist yet, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Reading(self.path.clone(), e)),
        };

        let raw: Value = serde_json::from_str(utils::io::fallback_string_if_needed(&contents))
            .map_err(|e| StoreError::Parsing(self.path.clone(), e))?;

        self.validator
            .validate(&raw)
            .map_err(|e| StoreError::Invalid(self.path.clone(), e))?;

        let trains: Vec<Train> = data_serialize::import_value(raw)
            .map_err(|e| StoreError::Parsing(self.path.clone(), e))?;

        log::debug!("loaded {} train(s) from {}", trains.len(), self.path.display());
        Ok(trains)
    }

    /// Overwrites the whole file with `trains`.
    pub fn save(&self, trains: &[Train]) -> Result<(), StoreError> {
        data_serialize::save_to_file(trains, &self.path)
            .map_err(|e| StoreError::Saving(self.path.clone(), e))?;

        log::debug!("saved {} train(s) to {}", trains.len(), self.path.display());
        Ok(())
    }
}
