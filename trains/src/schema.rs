//! Structural checks for a loaded train list.
//!
//! The checks themselves live in an external JSON Schema document, so the store only ever talks
//! to the [`Validate`] trait.

use jsonschema::JSONSchema;
use serde_json::Value;

use std::fmt;
use std::path::{Path, PathBuf};

/// Anything that can accept or reject a freshly parsed train list.
pub trait Validate {
    fn validate(&self, raw: &Value) -> Result<(), ValidationError>;
}

/// A loaded document couldn't be accepted.
#[derive(Debug)]
pub enum ValidationError {
    /// There was no usable schema to check against.
    Schema(SchemaError),
    /// The document broke the schema; one message per violation, prefixed by its JSON pointer.
    Violations(Vec<String>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(e) => write!(fmt, "{}", e),
            Self::Violations(v) => write!(fmt, "data validation failed: {}", v.join("; ")),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<SchemaError> for ValidationError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

/// The schema document itself is unusable.
#[derive(Debug)]
pub enum SchemaError {
    Reading(PathBuf, std::io::Error),
    Parsing(PathBuf, serde_json::Error),
    Compiling(PathBuf, String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading(path, e) => {
                write!(fmt, "failed to read schema {}: {}", path.display(), e)
            }
            Self::Parsing(path, e) => {
                write!(fmt, "failed to parse schema {}: {}", path.display(), e)
            }
            Self::Compiling(path, e) => {
                write!(fmt, "invalid schema {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Validates against a compiled JSON Schema document.
pub struct JsonSchemaValidator {
    compiled: JSONSchema,
}

impl JsonSchemaValidator {
    pub fn from_value(schema: &Value, origin: &Path) -> Result<Self, SchemaError> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|e| SchemaError::Compiling(origin.to_path_buf(), e.to_string()))?;

        Ok(Self { compiled })
    }

    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::Reading(path.to_path_buf(), e))?;
        let schema: Value = serde_json::from_str(&contents)
            .map_err(|e| SchemaError::Parsing(path.to_path_buf(), e))?;

        log::debug!("compiling schema {}", path.display());
        Self::from_value(&schema, path)
    }
}

impl Validate for JsonSchemaValidator {
    fn validate(&self, raw: &Value) -> Result<(), ValidationError> {
        self.compiled.validate(raw).map_err(|errors| {
            ValidationError::Violations(
                errors
                    .map(|e| format!("{}: {}", pointer_or_root(&e.instance_path.to_string()), e))
                    .collect(),
            )
        })
    }
}

fn pointer_or_root(pointer: &str) -> &str {
    if pointer.is_empty() {
        "/"
    } else {
        pointer
    }
}

/// A schema document on disk, read each time something actually needs validating.
///
/// A store that never finds an existing data file never touches the schema.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
}

impl SchemaFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<JsonSchemaValidator, SchemaError> {
        JsonSchemaValidator::from_file(&self.path)
    }
}

impl Validate for SchemaFile {
    fn validate(&self, raw: &Value) -> Result<(), ValidationError> {
        self.load()?.validate(raw)
    }
}
