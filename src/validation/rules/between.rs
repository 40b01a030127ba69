use serde_json::Value;

use super::Rule;
use crate::error::ConfigError;
use crate::validation::{
    constants::BETWEEN,
    value::{as_text, is_missing, text_length},
    Record, RuleArgs,
};

/// Fails when the textual length of the value falls outside `[min, max]`.
///
/// Numbers are measured through their decimal rendering, so `between:2,4`
/// accepts `10` and `9999` but not `5`. Absent and null values pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetweenRule {
    min: usize,
    max: usize,
}

impl BetweenRule {
    /// Returns `None` if the range is empty
    pub fn new(min: usize, max: usize) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Expects two bounds, as in `between:2,4`
    pub fn from_args(args: &RuleArgs) -> Result<Box<dyn Rule>, ConfigError> {
        args.expect_count(2)?;
        let min = args.usize_at(0)?;
        let max = args.usize_at(1)?;

        let rule = Self::new(min, max).ok_or_else(|| ConfigError::InvalidRange {
            rule: args.rule().to_owned(),
            min,
            max,
        })?;
        Ok(Box::new(rule))
    }
}

impl Rule for BetweenRule {
    fn name(&self) -> &str {
        BETWEEN
    }

    fn apply(&self, _field: &str, value: Option<&Value>, _record: &Record) -> bool {
        if is_missing(value) {
            return true;
        }
        value
            .and_then(as_text)
            .is_some_and(|text| (self.min..=self.max).contains(&text_length(&text)))
    }

    fn message(&self, alias: &str) -> String {
        format!("{} must be between {} and {} characters.", alias, self.min, self.max)
    }
}
