//! Presence, boolean and membership checks.

use super::{pass_if, Rules};
use crate::rule::Rule;
use crate::value::FieldValue;

impl Rules {
    /// Fails for `Null`, `""` and empty lists.
    pub fn required(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is required");
        Rule::guarded("required", msg.clone(), move |value, _| {
            let present = match value {
                FieldValue::List(items) => !items.is_empty(),
                other => !other.is_empty(),
            };
            pass_if(present, &msg)
        })
    }

    /// Passes only for `true`, `false`, `0` and `1`. Empty values fail.
    pub fn boolean(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "must be a valid boolean");
        Rule::guarded("boolean", msg.clone(), move |value, _| {
            let valid = match value {
                FieldValue::Bool(_) => true,
                FieldValue::Number(n) => *n == 0.0 || *n == 1.0,
                _ => false,
            };
            pass_if(valid, &msg)
        })
    }

    pub fn in_values<I, V>(&self, field: &str, candidates: I) -> Rule
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let candidates: Vec<FieldValue> = candidates.into_iter().map(Into::into).collect();
        let msg = self.message(&self.label(field), "must be one of required values");
        Rule::guarded("in_values", msg.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            pass_if(candidates.contains(value), &msg)
        })
    }

    /// Fails when the value is already taken. The message names the value
    /// rather than the field.
    pub fn not_in_values<I, V>(&self, field: &str, taken: I) -> Rule
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let taken: Vec<FieldValue> = taken.into_iter().map(Into::into).collect();
        let fragment = self.phrase("is already used");
        let fallback = self.message(&self.label(field), "is not valid");
        Rule::guarded("not_in_values", fallback, move |value, _| {
            if value.is_empty() || !taken.contains(value) {
                return Ok(Ok(()));
            }
            Ok(Err(format!("{} {}", value, fragment)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = Rules::default().required("name");
        assert_eq!(rule.check(&FieldValue::Null, None), Err("Name is required".to_string()));
        assert!(rule.check(&FieldValue::from(""), None).is_err());
        assert!(rule.check(&FieldValue::List(vec![]), None).is_err());
        assert!(rule.check(&FieldValue::from(vec!["x"]), None).is_ok());
        assert!(rule.check(&FieldValue::from("x"), None).is_ok());
        assert!(rule.check(&FieldValue::from(0), None).is_ok());
        assert!(rule.check(&FieldValue::from(false), None).is_ok());
    }

    #[test]
    fn test_boolean() {
        let rule = Rules::default().boolean("active");
        assert!(rule.check(&FieldValue::from(true), None).is_ok());
        assert!(rule.check(&FieldValue::from(false), None).is_ok());
        assert!(rule.check(&FieldValue::from(0), None).is_ok());
        assert!(rule.check(&FieldValue::from(1), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from(2), None),
            Err("Active must be a valid boolean".to_string())
        );
        assert!(rule.check(&FieldValue::from("true"), None).is_err());
        assert!(rule.check(&FieldValue::Null, None).is_err());
    }

    #[test]
    fn test_in_values() {
        let rule = Rules::default().in_values("role", ["a", "b"]);
        assert!(rule.check(&FieldValue::from("a"), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from("c"), None),
            Err("Role must be one of required values".to_string())
        );
        assert!(rule.check(&FieldValue::from(""), None).is_ok());
        assert!(rule.check(&FieldValue::Null, None).is_ok());
    }

    #[test]
    fn test_in_values_is_type_strict() {
        let rule = Rules::default().in_values("level", [1, 2, 3]);
        assert!(rule.check(&FieldValue::from(2), None).is_ok());
        assert!(rule.check(&FieldValue::from("2"), None).is_err());
    }

    #[test]
    fn test_not_in_values() {
        let rule = Rules::default().not_in_values("username", ["admin", "root"]);
        assert!(rule.check(&FieldValue::from("alice"), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from("admin"), None),
            Err("admin is already used".to_string())
        );
        assert!(rule.check(&FieldValue::from(""), None).is_ok());
    }
}
