//! Core error types for the CRM
//!
//! Field-level validation errors keep insertion order so that messages such as
//! "Please fill in the required fields: title, endDate" list fields the way the
//! form declares them.

use thiserror::Error;

/// Message attached to a field that was left empty.
pub const BLANK: &str = "can't be blank";

/// Core error type for all CRM operations
#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {}", .0.summary())]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CrmError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CrmError::NotFound {
            entity,
            field: "id",
            value: id.into(),
        }
    }
}

/// Validation errors collection: field name -> messages, plus base errors.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    errors: Vec<(String, Vec<String>)>,
    base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.errors.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((field, vec![message])),
        }
    }

    /// Record a required field that was left empty.
    pub fn add_blank(&mut self, field: impl Into<String>) {
        self.add(field, BLANK);
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|(name, _)| name == field)
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages)
    }

    /// Field names in the order they were first reported.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(name, _)| name.as_str())
    }

    pub fn base_errors(&self) -> &[String] {
        &self.base_errors
    }

    /// Fields that were reported as blank.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, messages)| messages.iter().any(|m| m == BLANK))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// The blocking message shown when required fields are missing.
    pub fn required_fields_message(&self) -> Option<String> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            None
        } else {
            Some(format!(
                "Please fill in the required fields: {}",
                missing.join(", ")
            ))
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            for message in messages {
                self.add(field.clone(), message);
            }
        }
        self.base_errors.extend(other.base_errors);
    }

    /// Prefix every field with `scope.` before merging, e.g. `materials[0].quantity`.
    pub fn merge_scoped(&mut self, scope: &str, other: ValidationErrors) {
        for (field, messages) in other.errors {
            for message in messages {
                self.add(format!("{}.{}", scope, field), message);
            }
        }
        for message in other.base_errors {
            self.add(scope.to_string(), message);
        }
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn summary(&self) -> String {
        self.required_fields_message()
            .unwrap_or_else(|| self.full_messages().join("; "))
    }
}
