//! Translation hook for labels and message fragments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps a phrase (field label or fixed message fragment) to display text.
pub trait Translator: Send + Sync {
    fn translate(&self, phrase: &str) -> String;
}

/// Returns every phrase unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translator for Identity {
    fn translate(&self, phrase: &str) -> String {
        phrase.to_string()
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, phrase: &str) -> String {
        self(phrase)
    }
}

/// Phrase table, usually loaded from the `[translations]` section of the
/// config file. Unknown phrases fall through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    phrases: BTreeMap<String, String>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, phrase: impl Into<String>, text: impl Into<String>) {
        self.phrases.insert(phrase.into(), text.into());
    }

    pub fn with(mut self, phrase: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(phrase, text);
        self
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Translator for Catalogue {
    fn translate(&self, phrase: &str) -> String {
        self.phrases
            .get(phrase)
            .cloned()
            .unwrap_or_else(|| phrase.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.translate("is required"), "is required");
    }

    #[test]
    fn test_closure_translator() {
        let upper = |phrase: &str| phrase.to_uppercase();
        assert_eq!(upper.translate("email"), "EMAIL");
    }

    #[test]
    fn test_catalogue_falls_through() {
        let catalogue = Catalogue::new().with("is required", "est requis");
        assert_eq!(catalogue.translate("is required"), "est requis");
        assert_eq!(catalogue.translate("email"), "email");
        assert_eq!(catalogue.len(), 1);
    }
}
