//! Root module for the validation system.
//! Exposes the public API for rule-based record validation.

mod constants;
mod descriptor;
mod error_bag;
mod registry;
pub mod rules;
mod validator;
mod value;

// Re-export commonly used types and functions
pub use constants::*;
pub use descriptor::{RuleDescriptor, RuleSpec};
pub use error_bag::ErrorBag;
pub use registry::{RuleArgs, RuleFactory, RuleRegistry};
pub use rules::Rule;
pub use validator::Validator;
pub use value::Record;
