//! Usernames and passwords.

use super::{pass_if, Rules};
use crate::context::InputsMap;
use crate::pattern::Pattern;
use crate::rule::Rule;
use crate::value::FieldValue;

static USERNAME: Pattern = Pattern::new(r"^[A-Za-z_][A-Za-z0-9_-]{3,}$");
static PASSWORD_CHARSET: Pattern = Pattern::new(r"^[\\ /!@#$%^&*()_+=:|0-9\p{L}]*$");

const STRICT_PASSWORD_MIN_LENGTH: usize = 8;

/// Where `confirm_password` finds the password to compare against.
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordSource {
    /// A value captured when the rule was built.
    Captured(String),
    /// The `current_value` of another field in the validation context.
    Field(String),
}

impl PasswordSource {
    fn resolve(&self, context: Option<&InputsMap>) -> FieldValue {
        match self {
            PasswordSource::Captured(password) => FieldValue::Text(password.clone()),
            PasswordSource::Field(field) => context
                .and_then(|inputs| inputs.get(field))
                .map(|state| state.current_value.clone())
                .unwrap_or_default(),
        }
    }
}

impl Rules {
    /// Letter or underscore first, at least four characters, then letters,
    /// digits, underscores and hyphens.
    pub fn username(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid username");
        self.pattern_rule("username", &USERNAME, msg, true)
    }

    /// Any non-empty string.
    pub fn password(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid password");
        Rule::guarded("password", msg.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            pass_if(value.as_text().is_some(), &msg)
        })
    }

    /// At least eight characters from a fixed safe set: letters, digits,
    /// space and `\ / ! @ # $ % ^ & * ( ) _ + = : |`.
    pub fn strict_password(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid password");
        Rule::guarded("strict_password", msg.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            let Some(text) = value.as_text() else {
                return pass_if(false, &msg);
            };
            let long_enough = text.chars().count() >= STRICT_PASSWORD_MIN_LENGTH;
            pass_if(long_enough && PASSWORD_CHARSET.is_match(text.trim())?, &msg)
        })
    }

    /// Value must equal the password from `source`. Empty values are
    /// compared like any other, so an empty confirmation only passes an
    /// empty password.
    pub fn confirm_password(&self, field: &str, source: PasswordSource) -> Rule {
        let msg = self.message(&self.label(field), "does not match password");
        Rule::guarded("confirm_password", msg.clone(), move |value, context| {
            let expected = source.resolve(context);
            let matches = if value.is_empty() || expected.is_empty() {
                value.is_empty() && expected.is_empty()
            } else {
                *value == expected
            };
            pass_if(matches, &msg)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InputState;
    use rstest::rstest;

    #[rstest]
    #[case("john", true)]
    #[case("_john_doe-2", true)]
    #[case("  alice  ", true)]
    #[case("joe", false)]
    #[case("2pac", false)]
    #[case("john doe", false)]
    #[case("jo[hn", false)]
    fn test_username(#[case] input: &str, #[case] valid: bool) {
        let rule = Rules::default().username("username");
        assert_eq!(rule.check(&FieldValue::from(input), None).is_ok(), valid, "{input}");
    }

    #[test]
    fn test_password_is_any_string() {
        let rule = Rules::default().password("password");
        assert!(rule.check(&FieldValue::from("x"), None).is_ok());
        assert!(rule.check(&FieldValue::from(""), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from(12345678), None),
            Err("Password is not valid password".to_string())
        );
    }

    #[rstest]
    #[case("correct horse", true)]
    #[case("P@ssw0rd!", true)]
    #[case("كلمةسريةطويلة", true)]
    #[case("short1!", false)]
    #[case("semi;colon;", false)]
    #[case("tilde~~~~~~", false)]
    fn test_strict_password(#[case] input: &str, #[case] valid: bool) {
        let rule = Rules::default().strict_password("password");
        assert_eq!(rule.check(&FieldValue::from(input), None).is_ok(), valid, "{input}");
    }

    #[test]
    fn test_confirm_captured_password() {
        let rule = Rules::default()
            .confirm_password("confirm password", PasswordSource::Captured("s3cret".into()));
        assert!(rule.check(&FieldValue::from("s3cret"), None).is_ok());
        assert_eq!(
            rule.check(&FieldValue::from("other"), None),
            Err("Confirm Password does not match password".to_string())
        );
        assert!(rule.check(&FieldValue::from(""), None).is_err());
    }

    #[test]
    fn test_confirm_against_context_field() {
        let rule = Rules::default()
            .confirm_password("confirm", PasswordSource::Field("password".into()));

        let mut inputs = InputsMap::new();
        inputs.insert("password".to_string(), InputState::new("hunter22"));

        assert!(rule.check(&FieldValue::from("hunter22"), Some(&inputs)).is_ok());
        assert!(rule.check(&FieldValue::from("hunter2"), Some(&inputs)).is_err());
        // no context: only an empty confirmation matches the missing password
        assert!(rule.check(&FieldValue::from(""), None).is_ok());
        assert!(rule.check(&FieldValue::from("hunter22"), None).is_err());
    }
}
