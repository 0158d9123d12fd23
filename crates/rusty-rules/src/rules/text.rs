//! Free text checks: titles, descriptions, hex strings and personal names.

use super::{pass_if, Rules};
use crate::pattern::Pattern;
use crate::rule::Rule;
use crate::value::FieldValue;

pub const TITLE_MAX_LENGTH: usize = 250;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

static HEX: Pattern = Pattern::new(r"^[A-Fa-f0-9]*$");
static NAME: Pattern = Pattern::new(r"^(?:\p{L}+ )*\p{L}+$");

/// Character-count limits with their prebuilt messages.
///
/// `min == 0` disables the lower bound. `min == max` (non-zero) means an
/// exact length.
#[derive(Debug, Clone)]
struct LengthCheck {
    min: usize,
    max: usize,
    not_string: String,
    too_long: String,
    too_short: String,
    not_exact: String,
}

impl LengthCheck {
    fn new(rules: &Rules, label: &str, min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            not_string: rules.message(label, "must be a string"),
            too_long: format!("{} {} {}", rules.message(label, "must be less than"), max, rules.phrase("in length")),
            too_short: format!("{} {} {}", rules.message(label, "must be greater than"), min, rules.phrase("in length")),
            not_exact: format!("{} {} {}", rules.message(label, "must be exactly"), min, rules.phrase("characters in length")),
        }
    }

    /// The text itself when the value is a string within bounds.
    fn check<'v>(&self, value: &'v FieldValue) -> Result<&'v str, String> {
        let Some(text) = value.as_text() else {
            return Err(self.not_string.clone());
        };
        let length = text.chars().count();
        if self.min > 0 && self.min == self.max {
            return if length == self.min {
                Ok(text)
            } else {
                Err(self.not_exact.clone())
            };
        }
        if length > self.max {
            return Err(self.too_long.clone());
        }
        if self.min > 0 && length < self.min {
            return Err(self.too_short.clone());
        }
        Ok(text)
    }
}

impl Rules {
    pub fn title(&self, field: &str) -> Rule {
        self.title_bounded(field, 0, TITLE_MAX_LENGTH)
    }

    pub fn title_bounded(&self, field: &str, min: usize, max: usize) -> Rule {
        self.bounded_text("title", field, min, max)
    }

    pub fn description(&self, field: &str) -> Rule {
        self.description_bounded(field, 0, DESCRIPTION_MAX_LENGTH)
    }

    pub fn description_bounded(&self, field: &str, min: usize, max: usize) -> Rule {
        self.bounded_text("description", field, min, max)
    }

    fn bounded_text(&self, name: &'static str, field: &str, min: usize, max: usize) -> Rule {
        let lengths = LengthCheck::new(self, &self.label(field), min, max);
        let fallback = lengths.not_string.clone();
        Rule::guarded(name, fallback, move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            Ok(lengths.check(value).map(|_| ()))
        })
    }

    pub fn hex(&self, field: &str) -> Rule {
        self.hex_bounded(field, 0, TITLE_MAX_LENGTH)
    }

    /// Length bounds first, then hex digits only.
    pub fn hex_bounded(&self, field: &str, min: usize, max: usize) -> Rule {
        let label = self.label(field);
        let lengths = LengthCheck::new(self, &label, min, max);
        let msg = self.message(&label, "must be valid hex containing only '0' to '9' and 'a' to 'f'");
        Rule::guarded("hex", msg.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            let text = match lengths.check(value) {
                Ok(text) => text,
                Err(err) => return Ok(Err(err)),
            };
            pass_if(HEX.is_match(text)?, &msg)
        })
    }

    /// Letter groups separated by single spaces, after trimming.
    pub fn name(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid name");
        self.pattern_rule("name", &NAME, msg, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn test_title_defaults() {
        let rule = Rules::default().title("title");
        assert!(rule.check(&text("Hello"), None).is_ok());
        assert!(rule.check(&text(""), None).is_ok());
        assert!(rule.check(&text(&"a".repeat(250)), None).is_ok());
        assert_eq!(
            rule.check(&text(&"a".repeat(251)), None),
            Err("Title must be less than 250 in length".to_string())
        );
        assert_eq!(
            rule.check(&FieldValue::from(5), None),
            Err("Title must be a string".to_string())
        );
    }

    #[test]
    fn test_title_min_length() {
        let rule = Rules::default().title_bounded("title", 3, 10);
        assert_eq!(
            rule.check(&text("ab"), None),
            Err("Title must be greater than 3 in length".to_string())
        );
        assert!(rule.check(&text("abc"), None).is_ok());
    }

    #[test]
    fn test_exact_length() {
        let rule = Rules::default().title_bounded("code", 4, 4);
        assert!(rule.check(&text("abcd"), None).is_ok());
        assert_eq!(
            rule.check(&text("abc"), None),
            Err("Code must be exactly 4 characters in length".to_string())
        );
        assert!(rule.check(&text("abcde"), None).is_err());
    }

    #[test]
    fn test_lengths_count_characters() {
        let rule = Rules::default().title_bounded("title", 0, 3);
        assert!(rule.check(&text("ليبيا"), None).is_err());
        assert!(rule.check(&text("ليب"), None).is_ok());
    }

    #[test]
    fn test_description_default_max() {
        let rule = Rules::default().description("notes");
        assert!(rule.check(&text(&"x".repeat(10_000)), None).is_ok());
        assert!(rule.check(&text(&"x".repeat(10_001)), None).is_err());
    }

    #[test]
    fn test_hex() {
        let rule = Rules::default().hex_bounded("color", 0, 6);
        assert!(rule.check(&text("00ffAA"), None).is_ok());
        assert_eq!(
            rule.check(&text("00ffzz"), None),
            Err("Color must be valid hex containing only '0' to '9' and 'a' to 'f'".to_string())
        );
        assert_eq!(
            rule.check(&text("00ff00ff"), None),
            Err("Color must be less than 6 in length".to_string())
        );
    }

    #[test]
    fn test_name() {
        let rule = Rules::default().name("full name");
        assert!(rule.check(&text("John Smith"), None).is_ok());
        assert!(rule.check(&text("  Zoë  "), None).is_ok());
        assert!(rule.check(&text("محمد علي"), None).is_ok());
        assert_eq!(
            rule.check(&text("John  Smith"), None),
            Err("Full Name is not valid name".to_string())
        );
        assert!(rule.check(&text("R2D2"), None).is_err());
        assert!(rule.check(&FieldValue::from(7), None).is_err());
    }
}
