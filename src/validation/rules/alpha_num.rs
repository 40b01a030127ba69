use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::Rule;
use crate::error::ConfigError;
use crate::validation::{constants::ALPHA_NUM, value::as_text, Record, RuleArgs};

// ASCII letters and digits only, at least one character
static ALPHA_NUM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile alphanumeric regex")
});

/// Accepts values made only of ASCII letters and digits.
///
/// Absent and null values pass, so this rule is paired with `required` for
/// mandatory fields. An empty string has no alphanumeric character and fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphaNumRule;

impl AlphaNumRule {
    pub fn from_args(args: &RuleArgs) -> Result<Box<dyn Rule>, ConfigError> {
        args.expect_count(0)?;
        Ok(Box::new(Self))
    }
}

impl Rule for AlphaNumRule {
    fn name(&self) -> &str {
        ALPHA_NUM
    }

    fn apply(&self, _field: &str, value: Option<&Value>, _record: &Record) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(value) => as_text(value).is_some_and(|text| ALPHA_NUM_REGEX.is_match(&text)),
        }
    }

    fn message(&self, alias: &str) -> String {
        format!("{} must be alphanumeric.", alias)
    }
}
