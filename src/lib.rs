//! Declarative per-field validation of form records.
//!
//! A [`Validator`] holds a set of rules per field, resolved through a
//! [`RuleRegistry`] when they are declared. Each call to [`Validator::make`]
//! runs one pass over an input record and collects the failures in an
//! [`ErrorBag`], using field aliases to build readable messages.

pub mod config;
pub mod consts;
pub mod error;
pub mod validation;

pub use config::FormConfig;
pub use error::{ConfigError, LoadError};
pub use validation::{
    ErrorBag, Record, Rule, RuleArgs, RuleDescriptor, RuleRegistry, RuleSpec, Validator,
};
