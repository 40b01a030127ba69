//! Loading of rule files (YAML) and input records (JSON).

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::validation::Record;

/// Rules and aliases of a form, as written in a rule file.
///
/// ```yaml
/// rules:
///   name: [required, "max:64"]
///   age: [alphaNum, "between:1,3"]
/// aliases:
///   name: Full name
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub rules: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

impl FormConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = read(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!("Loaded rules for {} field(s) from {}", config.rules.len(), path.display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Reads an input record from a JSON file holding a single object
pub fn load_record(path: impl AsRef<Path>) -> Result<Record, LoadError> {
    record_from_json_str(&read(path.as_ref())?)
}

pub fn record_from_json_str(content: &str) -> Result<Record, LoadError> {
    record_from_value(serde_json::from_str(content)?)
}

/// Converts a decoded JSON document into a record, keeping field order
pub fn record_from_value(value: Value) -> Result<Record, LoadError> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Err(LoadError::NotAnObject("null")),
        Value::Bool(_) => Err(LoadError::NotAnObject("a boolean")),
        Value::Number(_) => Err(LoadError::NotAnObject("a number")),
        Value::String(_) => Err(LoadError::NotAnObject("a string")),
        Value::Array(_) => Err(LoadError::NotAnObject("an array")),
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
