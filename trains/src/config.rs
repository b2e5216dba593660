use std::fmt;
use std::path::PathBuf;

pub const DATA_VAR: &str = "TRAINS_DATA";
pub const SCHEMA_VAR: &str = "TRAINS_SCHEMA";
pub const LOG_VAR: &str = "TRAINS_LOG";

/// Used when `TRAINS_SCHEMA` is unset; relative to the working directory.
pub const DEFAULT_SCHEMA: &str = "scheme.json";

/// Where everything is, decided once before any file is touched.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub schema_path: PathBuf,
}

/// Neither `--data` nor `TRAINS_DATA` was given.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MissingDataFile;

impl fmt::Display for MissingDataFile {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "The data file name is absent (use --data or ${})", DATA_VAR)
    }
}

impl std::error::Error for MissingDataFile {}

impl Config {
    /// Resolves the paths from the `--data` flag and the environment, in that order.
    ///
    /// `getenv` should treat empty variables as unset, like [`utils::aliases::getenv`].
    pub fn resolve<F>(data_flag: Option<PathBuf>, getenv: F) -> Result<Self, MissingDataFile>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = data_flag
            .or_else(|| getenv(DATA_VAR).map(PathBuf::from))
            .ok_or(MissingDataFile)?;

        let schema_path = getenv(SCHEMA_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA));

        Ok(Config {
            data_path,
            schema_path,
        })
    }
}
