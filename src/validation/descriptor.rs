//! Declarative rule sets: which rules apply to which field.

use std::sync::Arc;

use indexmap::IndexMap;

use super::rules::Rule;

/// One entry in the rule list of a field.
///
/// Rules are usually named, optionally with arguments (`"max:5"`), and
/// resolved through the registry. A rule object can also be handed over
/// directly when it does not need to be looked up by name.
#[derive(Debug, Clone)]
pub enum RuleDescriptor {
    Named(String),
    Custom(Arc<dyn Rule>),
}

impl RuleDescriptor {
    pub fn custom(rule: impl Rule + 'static) -> Self {
        Self::Custom(Arc::new(rule))
    }
}

impl From<&str> for RuleDescriptor {
    fn from(descriptor: &str) -> Self {
        Self::Named(descriptor.to_owned())
    }
}

impl From<String> for RuleDescriptor {
    fn from(descriptor: String) -> Self {
        Self::Named(descriptor)
    }
}

impl From<Arc<dyn Rule>> for RuleDescriptor {
    fn from(rule: Arc<dyn Rule>) -> Self {
        Self::Custom(rule)
    }
}

/// Rules of every field, in declaration order
pub type RuleSpec = IndexMap<String, Vec<RuleDescriptor>>;
