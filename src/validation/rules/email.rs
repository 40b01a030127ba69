use serde_json::Value;
use validator::ValidateEmail;

use super::Rule;
use crate::error::ConfigError;
use crate::validation::{constants::EMAIL, value::as_text, Record, RuleArgs};

/// Accepts e-mail addresses valid per the HTML5 specification.
/// Absent and null values pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailRule;

impl EmailRule {
    pub fn from_args(args: &RuleArgs) -> Result<Box<dyn Rule>, ConfigError> {
        args.expect_count(0)?;
        Ok(Box::new(Self))
    }
}

impl Rule for EmailRule {
    fn name(&self) -> &str {
        EMAIL
    }

    fn apply(&self, _field: &str, value: Option<&Value>, _record: &Record) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(value) => as_text(value).is_some_and(|text| text.trim().validate_email()),
        }
    }

    fn message(&self, alias: &str) -> String {
        format!("{} must be a valid email address.", alias)
    }
}
