// File: src/validator.rs
// Purpose: Apply per-field rule lists and keep the first failure of each field

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::context::InputsMap;
use crate::rule::Rule;
use crate::value::FieldValue;

/// Ordered rules for one field. The first failure wins.
pub type RuleList = Vec<Rule>;

/// Field identifier to its rule list.
pub type RulesMap = HashMap<String, RuleList>;

/// Field identifier to the value being validated.
pub type ValuesMap = HashMap<String, FieldValue>;

/// At most one message per field. Fields without an entry are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// True when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Error message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Rule lists bound to an optional context, ready to validate values.
///
/// Built once per form and reused for every submission. Safe to share
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RulesMap,
    context: Option<InputsMap>,
}

/// Create a validator from per-field rule lists and an optional context that
/// is handed to every rule.
pub fn create_validator(rules: RulesMap, context: Option<InputsMap>) -> Validator {
    Validator { rules, context }
}

impl Validator {
    pub fn rules(&self) -> &RulesMap {
        &self.rules
    }

    pub fn context(&self) -> Option<&InputsMap> {
        self.context.as_ref()
    }

    /// Replace the context, e.g. after the host's inputs changed.
    pub fn set_context(&mut self, context: Option<InputsMap>) {
        self.context = context;
    }

    /// Validate every field present in `values`.
    ///
    /// Fields without rules always pass. Fields with rules but no value are
    /// not visited.
    pub fn validate(&self, values: &ValuesMap) -> ValidationErrors {
        let mut errors = BTreeMap::new();

        for (field, value) in values {
            if let Some(message) = self.validate_field(field, value) {
                errors.insert(field.clone(), message);
            }
        }

        ValidationErrors { errors }
    }

    /// Run one field's rules in order, stopping at the first failure.
    pub fn validate_field(&self, field: &str, value: &FieldValue) -> Option<String> {
        let rules = self.rules.get(field)?;
        let context = self.context.as_ref();

        for rule in rules {
            if let Err(message) = rule.check(value, context) {
                tracing::debug!(field, rule = rule.name(), %message, "field failed validation");
                return Some(message);
            }
        }

        tracing::trace!(field, rules = rules.len(), "field passed validation");
        None
    }
}
