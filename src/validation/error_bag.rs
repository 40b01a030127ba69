//! Per-field collection of validation messages.

use indexmap::IndexMap;
use serde::Serialize;

/// The messages produced by one validation run, grouped by field.
///
/// Fields appear in the order their first failure was recorded, and each
/// field keeps its messages in the order the rules were declared. A field
/// with no failure has no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorBag {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the given field
    pub fn add(&mut self, field: &str, message: String) {
        match self.errors.get_mut(field) {
            Some(messages) => messages.push(message),
            None => {
                self.errors.insert(field.to_owned(), vec![message]);
            }
        }
    }

    /// Returns the messages of a field, or an empty slice if it has none
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all fields
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Returns the whole field to messages mapping
    pub fn as_map(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}
