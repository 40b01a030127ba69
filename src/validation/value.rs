//! Helpers to look at input values the way the rules need them.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

/// A decoded input record: field name to raw value, in submission order.
pub type Record = IndexMap<String, Value>;

/// Returns the textual form of a scalar value.
///
/// Strings are returned as is, numbers and booleans are rendered the way
/// JSON writes them. Null, arrays and objects have no textual form.
pub(crate) fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Length of a text in characters, not bytes
pub(crate) fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// True when the field was not submitted or was submitted as null
pub(crate) fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
