//! Numeric checks.

use super::Rules;
use crate::pattern::Pattern;
use crate::rule::{Rule, RuleFault};
use crate::value::FieldValue;

static FLOAT_PREFIX: Pattern =
    Pattern::new(r"^[+-]?(?:Infinity|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)");

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// `"5"`, `" 5.5kg"` and `"1e3"` parse; `"abc"` and `""` give `None`.
pub fn parse_float(text: &str) -> Result<Option<f64>, RuleFault> {
    let text = text.trim_start();
    let Some(found) = FLOAT_PREFIX.regex()?.find(text) else {
        return Ok(None);
    };
    Ok(found.as_str().parse::<f64>().ok())
}

fn numeric_value(value: &FieldValue) -> Result<Option<f64>, RuleFault> {
    match value {
        FieldValue::Number(n) if !n.is_nan() => Ok(Some(*n)),
        FieldValue::Text(text) => parse_float(text),
        _ => Ok(None),
    }
}

impl Rules {
    /// Value must parse as a number within the inclusive bounds, when given.
    /// The upper bound is checked first.
    pub fn number(&self, field: &str, min: Option<f64>, max: Option<f64>) -> Rule {
        let label = self.label(field);
        let invalid = self.message(&label, "is not a valid number");
        let too_large = max.map(|max| format!("{} {}", self.message(&label, "must be less than"), max));
        let too_small = min.map(|min| format!("{} {}", self.message(&label, "must be greater than"), min));

        Rule::guarded("number", invalid.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            let Some(number) = numeric_value(value)? else {
                return Ok(Err(invalid.clone()));
            };
            if let (Some(max), Some(msg)) = (max, &too_large) {
                if number > max {
                    return Ok(Err(msg.clone()));
                }
            }
            if let (Some(min), Some(msg)) = (min, &too_small) {
                if number < min {
                    return Ok(Err(msg.clone()));
                }
            }
            Ok(Ok(()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("5").unwrap(), Some(5.0));
        assert_eq!(parse_float("  -2.5").unwrap(), Some(-2.5));
        assert_eq!(parse_float("5abc").unwrap(), Some(5.0));
        assert_eq!(parse_float(".5").unwrap(), Some(0.5));
        assert_eq!(parse_float("1e3x").unwrap(), Some(1000.0));
        assert_eq!(parse_float("Infinity").unwrap(), Some(f64::INFINITY));
        assert_eq!(parse_float("abc").unwrap(), None);
        assert_eq!(parse_float("").unwrap(), None);
        assert_eq!(parse_float("-").unwrap(), None);
    }

    #[test]
    fn test_number_bounds() {
        let rule = Rules::default().number("age", Some(0.0), Some(10.0));
        assert!(rule.check(&FieldValue::from("5"), None).is_ok());
        assert!(rule.check(&FieldValue::from("0"), None).is_ok());
        assert!(rule.check(&FieldValue::from(10), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from("-1"), None),
            Err("Age must be greater than 0".to_string())
        );
        assert_eq!(
            rule.check(&FieldValue::from("11"), None),
            Err("Age must be less than 10".to_string())
        );
        assert_eq!(
            rule.check(&FieldValue::from("abc"), None),
            Err("Age is not a valid number".to_string())
        );
    }

    #[test]
    fn test_number_without_bounds() {
        let rule = Rules::default().number("amount", None, None);
        assert!(rule.check(&FieldValue::from("-1e9"), None).is_ok());
        assert!(rule.check(&FieldValue::from(""), None).is_ok());
        assert!(rule.check(&FieldValue::Null, None).is_ok());
        assert!(rule.check(&FieldValue::from(true), None).is_err());
        assert!(rule.check(&FieldValue::Number(f64::NAN), None).is_err());
    }
}
