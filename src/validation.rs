//! Field-level validation error collection.
//!
//! Service-layer request validation checks every field before failing so
//! adapters can surface all problems from a single submission. Failures are
//! keyed by field path (`title`, `due_date`, `category.color`, ...), the
//! shape adapters need to attach messages to form fields or API payloads.

use std::collections::BTreeMap;
use thiserror::Error;

/// Accumulated validation failures keyed by field path.
///
/// The map is ordered so error listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", format_fields(.fields))]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Creates a collection holding a single field failure.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Records a failure for `field`.
    ///
    /// A later failure for the same field replaces the earlier message; the
    /// first broken constraint per field is the one callers report, so
    /// validators are expected to stop at the first failure per field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// Folds a fallible field check into the collection.
    ///
    /// Returns the successful value so callers can collect it, keeping the
    /// validate-everything-then-fail flow linear.
    pub fn check<T, E: std::fmt::Display>(
        &mut self,
        field: &str,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(field, err.to_string());
                None
            }
        }
    }

    /// Returns `true` when no failures have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Converts the collection into `Err(self)` when any failure was
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed validation.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
