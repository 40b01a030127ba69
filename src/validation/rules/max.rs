use serde_json::Value;

use super::Rule;
use crate::error::ConfigError;
use crate::validation::{
    constants::MAX,
    value::{as_text, is_missing, text_length},
    Record, RuleArgs,
};

/// Fails when the textual form of the value is longer than `max` characters.
///
/// Absent and null values pass. Arrays and objects have no textual form
/// and always fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLengthRule {
    max: usize,
}

impl MaxLengthRule {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Expects a single argument, as in `max:5`
    pub fn from_args(args: &RuleArgs) -> Result<Box<dyn Rule>, ConfigError> {
        args.expect_count(1)?;
        Ok(Box::new(Self::new(args.usize_at(0)?)))
    }
}

impl Rule for MaxLengthRule {
    fn name(&self) -> &str {
        MAX
    }

    fn apply(&self, _field: &str, value: Option<&Value>, _record: &Record) -> bool {
        if is_missing(value) {
            return true;
        }
        value
            .and_then(as_text)
            .is_some_and(|text| text_length(&text) <= self.max)
    }

    fn message(&self, alias: &str) -> String {
        format!("{} may not be greater than {} characters.", alias, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_length_boundaries() {
        let record = Record::new();
        let rule = MaxLengthRule::new(5);
        let cases = vec![
            (json!("abcde"), true),
            (json!("abcdef"), false),
            (json!(""), true),
            (json!("ééééé"), true),
            (json!(12345), true),
            (json!(123456), false),
            (json!(["a"]), false),
        ];

        for (value, expected) in cases {
            assert_eq!(rule.apply("name", Some(&value), &record), expected,
                       "Unexpected result for {}", value);
        }
    }

    #[test]
    fn test_missing_value_passes() {
        let record = Record::new();
        let rule = MaxLengthRule::new(0);
        assert!(rule.apply("name", None, &record));
        assert!(rule.apply("name", Some(&Value::Null), &record));
    }

    #[test]
    fn test_from_args() {
        let rule = MaxLengthRule::from_args(&RuleArgs::parse("max:12").unwrap()).unwrap();
        assert_eq!(rule.message("Name"), "Name may not be greater than 12 characters.");
        assert!(MaxLengthRule::from_args(&RuleArgs::parse("max:twelve").unwrap()).is_err());
    }
}
