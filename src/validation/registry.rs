//! Rule registry: maps rule names to factories building the rule objects.

use std::{collections::HashMap, fmt, sync::Arc};

use log::{debug, warn};

use super::constants::{ALPHA_NUM, ARGS_SEPARATOR, BETWEEN, EMAIL, MAX, REQUIRED, RULE_ARGS_SEPARATOR};
use super::rules::{AlphaNumRule, BetweenRule, EmailRule, MaxLengthRule, RequiredRule, Rule};
use crate::error::ConfigError;

/// Builds a rule from its parsed arguments.
pub type RuleFactory = Arc<dyn Fn(&RuleArgs) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync>;

/// A rule descriptor split into its name and its raw arguments.
///
/// `between:2,4` gives the name `between` and the arguments `["2", "4"]`.
/// A descriptor without separator has no arguments. Factories use the typed
/// accessors to reject a wrong number or type of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleArgs {
    rule: String,
    args: Vec<String>,
}

impl RuleArgs {
    /// Splits a descriptor, returns `None` when the rule name is empty
    pub fn parse(descriptor: &str) -> Option<Self> {
        let (rule, args) = match descriptor.split_once(RULE_ARGS_SEPARATOR) {
            Some((rule, args)) => (
                rule.trim(),
                args.split(ARGS_SEPARATOR)
                    .map(|arg| arg.trim().to_owned())
                    .collect(),
            ),
            None => (descriptor.trim(), Vec::new()),
        };

        if rule.is_empty() {
            return None;
        }

        Some(Self {
            rule: rule.to_owned(),
            args,
        })
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Fails unless exactly `expected` arguments were given
    pub fn expect_count(&self, expected: usize) -> Result<(), ConfigError> {
        if self.args.len() != expected {
            return Err(ConfigError::ArgumentCount {
                rule: self.rule.clone(),
                expected,
                found: self.args.len(),
            });
        }
        Ok(())
    }

    /// Parses the argument at `index` as a non-negative integer
    pub fn usize_at(&self, index: usize) -> Result<usize, ConfigError> {
        let argument = self.args.get(index).ok_or_else(|| ConfigError::ArgumentCount {
            rule: self.rule.clone(),
            expected: index + 1,
            found: self.args.len(),
        })?;

        argument.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidArgument {
            rule: self.rule.clone(),
            argument: argument.clone(),
            reason: e.to_string(),
        })
    }
}

/// Mapping from rule name to factory.
///
/// Each validator owns its registry, so adding a rule never touches shared
/// state. New rules are plugged in with [`RuleRegistry::register`].
#[derive(Clone, Default)]
pub struct RuleRegistry {
    factories: HashMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Creates a registry without any rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `required`, `alphaNum`, `max`, `between` and `email`
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry
            .register(REQUIRED, RequiredRule::from_args)
            .register(ALPHA_NUM, AlphaNumRule::from_args)
            .register(MAX, MaxLengthRule::from_args)
            .register(BETWEEN, BetweenRule::from_args)
            .register(EMAIL, EmailRule::from_args);
        registry
    }

    /// Adds a rule factory, replacing any factory with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&RuleArgs) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Arc::new(factory)).is_some() {
            warn!("Rule `{}` was already registered, replacing it", name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Turns a textual descriptor declared for `field` into a rule
    pub fn resolve(&self, field: &str, descriptor: &str) -> Result<Box<dyn Rule>, ConfigError> {
        let args = RuleArgs::parse(descriptor).ok_or_else(|| ConfigError::EmptyRule {
            field: field.to_owned(),
        })?;

        let factory = self
            .factories
            .get(args.rule())
            .ok_or_else(|| ConfigError::UnknownRule {
                field: field.to_owned(),
                rule: args.rule().to_owned(),
            })?;

        debug!("Resolving rule `{}` for field `{}`", descriptor, field);
        factory(&args)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
