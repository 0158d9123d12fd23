// File: src/rule.rs
// Purpose: Rule type and the guard that keeps internal faults inside a rule

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::context::InputsMap;
use crate::value::FieldValue;

/// `Ok(())` when the value passes, `Err(message)` with a display message otherwise.
pub type RuleResult = Result<(), String>;

type CheckFn = dyn Fn(&FieldValue, Option<&InputsMap>) -> RuleResult + Send + Sync;

/// Internal failure while evaluating a rule.
///
/// Faults never reach the caller of [`Rule::check`]; the guard logs them and
/// answers with the rule's own failure message.
#[derive(Debug, Error)]
pub enum RuleFault {
    #[error("pattern `{pattern}` failed to compile")]
    Pattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A single check on one field value.
///
/// Cloning is cheap; clones share the same check.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    check: Arc<CheckFn>,
}

impl Rule {
    /// Wrap a check that already follows the rule contract.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&FieldValue, Option<&InputsMap>) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Wrap a fallible check. A fault is logged and turned into `fallback`.
    pub fn guarded<F>(name: &'static str, fallback: String, check: F) -> Self
    where
        F: Fn(&FieldValue, Option<&InputsMap>) -> Result<RuleResult, RuleFault>
            + Send
            + Sync
            + 'static,
    {
        Self::new(name, move |value, context| match check(value, context) {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::error!(rule = name, error = ?fault, "rule fault, reporting field as invalid");
                Err(fallback.clone())
            }
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self, value: &FieldValue, context: Option<&InputsMap>) -> RuleResult {
        (self.check)(value, context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_plain_rule() {
        let rule = Rule::new("even", |value, _| match value.as_number() {
            Some(n) if n % 2.0 == 0.0 => Ok(()),
            _ => Err("must be even".to_string()),
        });

        assert_eq!(rule.name(), "even");
        assert!(rule.check(&FieldValue::from(4), None).is_ok());
        assert_eq!(rule.check(&FieldValue::from(3), None), Err("must be even".to_string()));
    }

    #[test]
    fn test_guard_converts_fault() {
        let rule = Rule::guarded("boom", "Field is invalid".to_string(), |_, _| {
            Err(RuleFault::from(anyhow!("engine exploded")))
        });

        assert_eq!(
            rule.check(&FieldValue::from("x"), None),
            Err("Field is invalid".to_string())
        );
    }

    #[test]
    fn test_clones_share_check() {
        let rule = Rule::new("always", |_, _| Ok(()));
        let copy = rule.clone();
        assert_eq!(copy.name(), "always");
        assert!(copy.check(&FieldValue::Null, None).is_ok());
        assert_eq!(format!("{:?}", rule), "Rule { name: \"always\" }");
    }
}
