//! The validation engine.

use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, trace};

use super::{
    descriptor::RuleDescriptor, error_bag::ErrorBag, registry::RuleRegistry, rules::Rule,
    value::Record,
};
use crate::{config::FormConfig, error::ConfigError};

/// Validates records against a fixed set of per-field rules.
///
/// Rules are resolved when they are declared through [`Validator::set_rules`],
/// so an unknown rule or a malformed argument is reported before any record
/// is seen. Each [`Validator::make`] call then starts from an empty
/// [`ErrorBag`] and runs one pass over the declared fields.
///
/// Reading the errors before the first `make` gives an empty bag, which
/// means `passes()` is `true` at that point.
///
/// ```
/// use formcheck::Validator;
/// use serde_json::json;
///
/// let mut validator = Validator::new();
/// validator.set_rules([("name", vec!["required"]), ("age", vec!["alphaNum"])]).unwrap();
///
/// let record: formcheck::Record = [("name".to_string(), json!("")), ("age".to_string(), json!("15-a"))]
///     .into_iter()
///     .collect();
/// validator.make(&record);
///
/// assert!(!validator.passes());
/// assert_eq!(validator.field_errors("name"), ["name is required."]);
/// ```
#[derive(Debug)]
pub struct Validator {
    registry: RuleRegistry,
    rules: IndexMap<String, Vec<Arc<dyn Rule>>>,
    aliases: IndexMap<String, String>,
    error_bag: ErrorBag,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Creates a validator using the built-in rules
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_builtin_rules())
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            rules: IndexMap::new(),
            aliases: IndexMap::new(),
            error_bag: ErrorBag::new(),
        }
    }

    /// Builds a validator from a loaded rule file
    pub fn from_config(config: &FormConfig) -> Result<Self, ConfigError> {
        let mut validator = Self::new();
        validator.set_rules(
            config
                .rules
                .iter()
                .map(|(field, rules)| (field.as_str(), rules.iter().map(String::as_str))),
        )?;
        validator.set_aliases(config.aliases.clone());
        Ok(validator)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Declares the rules of every field and resolves them.
    ///
    /// The whole set replaces the previous one only if every descriptor
    /// resolves. A field listed twice gets the rules of both entries.
    pub fn set_rules<I, K, R, D>(&mut self, rule_spec: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: IntoIterator<Item = D>,
        D: Into<RuleDescriptor>,
    {
        let mut resolved: IndexMap<String, Vec<Arc<dyn Rule>>> = IndexMap::new();

        for (field, descriptors) in rule_spec {
            let field = field.into();
            let mut rules = Vec::new();

            for descriptor in descriptors {
                let rule: Arc<dyn Rule> = match descriptor.into() {
                    RuleDescriptor::Named(text) => Arc::from(self.registry.resolve(&field, &text)?),
                    RuleDescriptor::Custom(rule) => rule,
                };
                rules.push(rule);
            }

            resolved.entry(field).or_default().extend(rules);
        }

        debug!(
            "Declared {} rule(s) over {} field(s)",
            resolved.values().map(Vec::len).sum::<usize>(),
            resolved.len()
        );
        self.rules = resolved;
        Ok(())
    }

    /// Sets the display names used in messages
    pub fn set_aliases<I, K, V>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases = aliases
            .into_iter()
            .map(|(field, alias)| (field.into(), alias.into()))
            .collect();
    }

    /// Returns the alias of a field, or the field name itself
    pub fn alias<'a>(&'a self, field: &'a str) -> &'a str {
        self.aliases.get(field).map(String::as_str).unwrap_or(field)
    }

    /// Fields with declared rules, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Runs one validation pass over `data`, discarding previous errors.
    ///
    /// Every declared field is checked, even when missing from `data`; the
    /// rules then receive `None` as value.
    pub fn make(&mut self, data: &Record) {
        self.error_bag.clear();

        for (field, rules) in &self.rules {
            let value = data.get(field);
            for rule in rules {
                let passed = rule.apply(field, value, data);
                trace!("Rule `{}` on field `{}`: {}", rule.name(), field, passed);

                if !passed {
                    let alias = self.aliases.get(field).unwrap_or(field);
                    self.error_bag.add(field, rule.message(alias));
                }
            }
        }

        debug!(
            "Validated {} field(s): {} error(s)",
            self.rules.len(),
            self.error_bag.count()
        );
    }

    /// True when the last run produced no error
    pub fn passes(&self) -> bool {
        self.error_bag.is_empty()
    }

    pub fn fails(&self) -> bool {
        !self.passes()
    }

    /// All errors of the last run
    pub fn errors(&self) -> &ErrorBag {
        &self.error_bag
    }

    /// Errors of one field, empty if it passed or has no rules
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.error_bag.get(field)
    }

    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.error_bag.first(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleArgs;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            other => panic!("Not an object: {}", other),
        }
    }

    #[derive(Debug)]
    struct SameAs(&'static str);

    impl Rule for SameAs {
        fn name(&self) -> &str {
            "same"
        }

        fn apply(&self, _field: &str, value: Option<&Value>, record: &Record) -> bool {
            value == record.get(self.0)
        }

        fn message(&self, alias: &str) -> String {
            format!("{} must match {}.", alias, self.0)
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut validator = Validator::new();
        validator
            .set_rules([("name", vec!["required"]), ("age", vec!["alphaNum"])])
            .unwrap();

        validator.make(&record(json!({"name": "", "age": "15-a"})));

        assert!(!validator.passes());
        assert!(validator.fails());
        assert_eq!(validator.field_errors("name"), ["name is required."]);
        assert_eq!(validator.field_errors("age"), ["age must be alphanumeric."]);
    }

    #[test]
    fn test_valid_record_passes() {
        let mut validator = Validator::new();
        validator
            .set_rules([
                ("name", vec!["required", "alphaNum", "max:10"]),
                ("code", vec!["between:2,4"]),
                ("email", vec!["required", "email"]),
            ])
            .unwrap();

        validator.make(&record(json!({
            "name": "alice42",
            "code": "ab1",
            "email": "alice@example.com",
        })));

        assert!(validator.passes());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_fields_without_rules_never_fail() {
        let mut validator = Validator::new();
        validator
            .set_rules([("name", Vec::<&str>::new()), ("other", vec!["required"])])
            .unwrap();

        let values = vec![json!(null), json!(""), json!("!!!"), json!([])];
        for value in values {
            validator.make(&record(json!({"name": value.clone(), "other": "x"})));
            assert!(validator.passes(), "Field without rules failed for {}", value);
        }
    }

    #[test]
    fn test_missing_field_is_checked() {
        let mut validator = Validator::new();
        validator
            .set_rules([("name", vec!["required"]), ("nick", vec!["max:3"])])
            .unwrap();

        validator.make(&Record::new());

        assert_eq!(validator.field_errors("name"), ["name is required."]);
        assert!(validator.field_errors("nick").is_empty());
    }

    #[test]
    fn test_messages_follow_declaration_order() {
        let mut validator = Validator::new();
        validator
            .set_rules([
                ("b", vec!["required", "alphaNum"]),
                ("a", vec!["alphaNum", "between:2,4", "max:3"]),
            ])
            .unwrap();

        validator.make(&record(json!({"b": "", "a": "a-b-c"})));

        assert_eq!(validator.field_errors("b"), ["b is required.", "b must be alphanumeric."]);
        assert_eq!(
            validator.field_errors("a"),
            [
                "a must be alphanumeric.",
                "a must be between 2 and 4 characters.",
                "a may not be greater than 3 characters.",
            ]
        );
        assert_eq!(validator.errors().fields().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_aliases_in_messages() {
        let mut validator = Validator::new();
        validator.set_rules([("email", vec!["required"])]).unwrap();
        validator.set_aliases([("email", "Email")]);

        validator.make(&Record::new());

        let message = validator.first_error("email").unwrap();
        assert!(message.contains("Email"));
        assert!(!message.contains("email"));
        assert_eq!(validator.alias("email"), "Email");
        assert_eq!(validator.alias("name"), "name");
    }

    #[test]
    fn test_make_resets_errors() {
        let mut validator = Validator::new();
        validator.set_rules([("name", vec!["required"])]).unwrap();

        validator.make(&Record::new());
        assert!(validator.fails());

        validator.make(&record(json!({"name": "alice"})));
        assert!(validator.passes());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_errors_before_make_are_empty() {
        let mut validator = Validator::new();
        validator.set_rules([("name", vec!["required"])]).unwrap();

        assert!(validator.passes());
        assert!(validator.errors().is_empty());
        assert!(validator.field_errors("name").is_empty());
    }

    #[test]
    fn test_passes_matches_empty_errors() {
        let mut validator = Validator::new();
        validator
            .set_rules([("name", vec!["required", "max:3"])])
            .unwrap();

        let inputs = vec![json!({}), json!({"name": "bob"}), json!({"name": "bobby"})];
        for input in inputs {
            validator.make(&record(input.clone()));
            assert_eq!(validator.passes(), validator.errors().is_empty(), "Mismatch for {}", input);
        }
    }

    #[test]
    fn test_configuration_errors_fail_fast() {
        let mut validator = Validator::new();
        validator.set_rules([("name", vec!["required"])]).unwrap();

        let result = validator.set_rules([("name", vec!["required"]), ("age", vec!["numeric"])]);
        assert!(matches!(result, Err(ConfigError::UnknownRule { .. })));

        let result = validator.set_rules([("age", vec!["between:1"])]);
        assert!(matches!(result, Err(ConfigError::ArgumentCount { .. })));

        // Previous rules are kept
        assert_eq!(validator.fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_custom_rule_objects() {
        let mut validator = Validator::new();
        validator
            .set_rules([(
                "confirm",
                vec![RuleDescriptor::from("required"), RuleDescriptor::custom(SameAs("password"))],
            )])
            .unwrap();
        validator.set_aliases([("confirm", "Confirmation")]);

        validator.make(&record(json!({"password": "secret", "confirm": "other"})));
        assert_eq!(validator.field_errors("confirm"), ["Confirmation must match password."]);

        validator.make(&record(json!({"password": "secret", "confirm": "secret"})));
        assert!(validator.passes());
    }

    #[test]
    fn test_registered_rule_is_usable() {
        let mut validator = Validator::new();
        validator.registry_mut().register("same_as_password", |args: &RuleArgs| {
            args.expect_count(0)?;
            Ok(Box::new(SameAs("password")) as Box<dyn Rule>)
        });
        validator
            .set_rules([("confirm", vec!["same_as_password"])])
            .unwrap();

        validator.make(&record(json!({"password": "a", "confirm": "b"})));
        assert_eq!(validator.field_errors("confirm"), ["confirm must match password."]);
    }

    #[test]
    fn test_duplicate_field_entries_accumulate() {
        let mut validator = Validator::new();
        validator
            .set_rules(vec![
                ("name".to_string(), vec!["required"]),
                ("name".to_string(), vec!["max:2"]),
            ])
            .unwrap();

        validator.make(&record(json!({"name": "abc"})));
        assert_eq!(validator.field_errors("name"), ["name may not be greater than 2 characters."]);
    }
}
