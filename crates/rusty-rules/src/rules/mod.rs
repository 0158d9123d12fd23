//! Rule factory.
//!
//! [`Rules`] builds one [`Rule`] per check. Every constructor takes the
//! field label first; the label is translated and capitalized once, when the
//! rule is built, and reused for every message the rule produces.
//!
//! Shared contract:
//! - empty values (`Null` or `""`) pass, except for `required`, `boolean`
//!   and `confirm_password`
//! - failures are `"<Label> <fragment>"` with the fragment translated
//! - internal faults are logged and reported as the rule's failure message

use std::sync::Arc;

use crate::context::InputsMap;
use crate::label::capitalize;
use crate::pattern::Pattern;
use crate::rule::{Rule, RuleFault};
use crate::translate::{Identity, Translator};
use crate::value::FieldValue;

mod contact;
mod credentials;
mod identifiers;
mod numeric;
mod presence;
mod text;

pub use credentials::PasswordSource;
pub use numeric::parse_float;
pub use text::{DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH};

/// Factory for validation rules.
#[derive(Clone)]
pub struct Rules {
    translator: Arc<dyn Translator>,
    capitalize_labels: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            translator: Arc::new(Identity),
            capitalize_labels: true,
        }
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("capitalize_labels", &self.capitalize_labels)
            .finish_non_exhaustive()
    }
}

impl Rules {
    pub fn new<T: Translator + 'static>(translator: T) -> Self {
        Self::with_translator(Arc::new(translator))
    }

    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            capitalize_labels: true,
        }
    }

    /// Turn label capitalization on or off (on by default).
    pub fn capitalize_labels(mut self, enabled: bool) -> Self {
        self.capitalize_labels = enabled;
        self
    }

    /// Display form of a field label.
    pub fn label(&self, field: &str) -> String {
        let translated = self.translator.translate(field);
        if self.capitalize_labels {
            capitalize(&translated)
        } else {
            translated
        }
    }

    pub fn phrase(&self, phrase: &str) -> String {
        self.translator.translate(phrase)
    }

    fn message(&self, label: &str, fragment: &str) -> String {
        format!("{} {}", label, self.phrase(fragment))
    }

    /// Host-defined check. `predicate` answers whether the value is valid;
    /// an `Err` is treated as an internal fault and logged. Empty values are
    /// handed to the predicate like any other value.
    pub fn custom<F>(&self, field: &str, name: &'static str, fragment: &str, predicate: F) -> Rule
    where
        F: Fn(&FieldValue, Option<&InputsMap>) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        let msg = self.message(&self.label(field), fragment);
        let fallback = msg.clone();
        Rule::guarded(name, fallback, move |value, context| {
            let valid = predicate(value, context)?;
            Ok(if valid { Ok(()) } else { Err(msg.clone()) })
        })
    }

    /// Text rule backed by a single pattern. Empty passes, non-text fails,
    /// text is trimmed before matching when `trim` is set.
    fn pattern_rule(&self, name: &'static str, pattern: &'static Pattern, msg: String, trim: bool) -> Rule {
        Rule::guarded(name, msg.clone(), move |value, _| {
            if value.is_empty() {
                return Ok(Ok(()));
            }
            let Some(text) = value.as_text() else {
                tracing::debug!(rule = name, kind = value.kind(), "expected a string");
                return Ok(Err(msg.clone()));
            };
            let text = if trim { text.trim() } else { text };
            Ok(if pattern.is_match(text)? {
                Ok(())
            } else {
                Err(msg.clone())
            })
        })
    }
}

/// Shared with the submodules: lift a plain outcome into the guarded shape.
fn pass_if(valid: bool, msg: &str) -> Result<Result<(), String>, RuleFault> {
    Ok(if valid { Ok(()) } else { Err(msg.to_string()) })
}
