use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::aliases::JsonError;

/// A trait for managing a list of data that lives in a json file.
pub trait Manager {
    /// The data type stored on this manager.
    type Data;

    /// Get an immutable reference to the data inside the manager.
    fn data(&self) -> &[Self::Data];

    /// Get a mutable reference to the data inside the manager.
    ///
    /// Callers that change the data are expected to run [`Manager::after_interact_mut_hook`].
    fn data_mut(&mut self) -> &mut Vec<Self::Data>;

    /// A hook that is ran after a mutable interaction is made.
    fn after_interact_mut_hook(&mut self);
}

pub mod data_serialize {
    use std::path::Path;

    use serde_json::ser::{PrettyFormatter, Serializer};

    use super::{DeserializeOwned, JsonError, Serialize};

    /// The indentation used by exports.
    pub const INDENT: &[u8] = b"    ";

    #[derive(Debug)]
    pub enum SaveToFileError {
        Saving(std::io::Error),
        Exporting(serde_json::Error),
    }

    impl std::fmt::Display for SaveToFileError {
        fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Saving(e) => write!(fmt, "Error while saving: {}", e),
                Self::Exporting(e) => write!(fmt, "Error while exporting: {}", e),
            }
        }
    }

    impl std::error::Error for SaveToFileError {}

    /// Import a vector of T from an already parsed json value.
    pub fn import_value<T>(value: serde_json::Value) -> Result<Vec<T>, JsonError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(value)
    }

    /// Export a T slice into a prettified json string, indented by [`INDENT`].
    ///
    /// Non-ASCII characters are written as-is.
    pub fn export<T>(data: &[T]) -> serde_json::Result<String>
    where
        T: Serialize,
    {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        data.serialize(&mut ser)?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Export a T slice into a json string and then save it into a file.
    pub fn save_to_file<T>(data: &[T], file: &Path) -> Result<(), SaveToFileError>
    where
        T: Serialize,
    {
        let export_string = export(data).map_err(SaveToFileError::Exporting)?;
        std::fs::write(file, &export_string).map_err(SaveToFileError::Saving)?;

        Ok(())
    }
}
