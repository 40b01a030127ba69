use serde_json::Value;

use super::Rule;
use crate::error::ConfigError;
use crate::validation::{constants::REQUIRED, RuleArgs, Record};

/// Fails on absent or null values, blank strings and empty collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredRule;

impl RequiredRule {
    pub fn from_args(args: &RuleArgs) -> Result<Box<dyn Rule>, ConfigError> {
        args.expect_count(0)?;
        Ok(Box::new(Self))
    }
}

impl Rule for RequiredRule {
    fn name(&self) -> &str {
        REQUIRED
    }

    fn apply(&self, _field: &str, value: Option<&Value>, _record: &Record) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.trim().is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
        }
    }

    fn message(&self, alias: &str) -> String {
        format!("{} is required.", alias)
    }
}
