//! Rule strategies applied to single fields.

mod alpha_num;
mod between;
mod email;
mod max;
mod required;

use std::fmt;

use serde_json::Value;

use super::value::Record;

pub use alpha_num::AlphaNumRule;
pub use between::BetweenRule;
pub use email::EmailRule;
pub use max::MaxLengthRule;
pub use required::RequiredRule;

/// A single check on one field of a record.
///
/// `value` is `None` when the field is absent from the record. The whole
/// record is passed along for rules that compare fields with each other.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Name under which the rule is registered
    fn name(&self) -> &str;

    /// Returns `true` when the value satisfies the rule
    fn apply(&self, field: &str, value: Option<&Value>, record: &Record) -> bool;

    /// Message reported when the rule fails, using the field's display name
    fn message(&self, alias: &str) -> String;
}
