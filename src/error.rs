//! Errors raised while configuring a validator or loading its inputs.
//!
//! Rule failures on input data are never errors: they end up in the
//! [`ErrorBag`](crate::ErrorBag). The types below only cover mistakes in the
//! rule declarations themselves and in the files they are read from.

use std::{io, path::PathBuf};
use thiserror::Error;

/// A rule declaration that cannot be turned into a rule.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown rule `{rule}` declared for field `{field}`")]
    UnknownRule { field: String, rule: String },

    #[error("Empty rule declared for field `{field}`")]
    EmptyRule { field: String },

    #[error("Rule `{rule}` expects {expected} argument(s), got {found}")]
    ArgumentCount {
        rule: String,
        expected: usize,
        found: usize,
    },

    #[error("Rule `{rule}` has an invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        rule: String,
        argument: String,
        reason: String,
    },

    #[error("Rule `{rule}` has an empty range: {min} is greater than {max}")]
    InvalidRange { rule: String, min: usize, max: usize },
}

/// Failure to read a rule file or an input record.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let unknown = ConfigError::UnknownRule {
            field: "name".to_string(),
            rule: "nope".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown rule `nope` declared for field `name`");

        let count = ConfigError::ArgumentCount {
            rule: "between".to_string(),
            expected: 2,
            found: 1,
        };
        assert_eq!(count.to_string(), "Rule `between` expects 2 argument(s), got 1");
    }

    #[test]
    fn test_load_error_wraps_config_error() {
        let error: LoadError = ConfigError::EmptyRule {
            field: "age".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Empty rule declared for field `age`");
    }
}
