// File: src/config.rs
// Purpose: Configuration parsing from rusty-rules.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::rules::Rules;
use crate::schema::FormSchema;
use crate::translate::Catalogue;
use crate::validator::{create_validator, Validator};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelConfig,

    /// Phrase to display text, applied to labels and message fragments
    #[serde(default)]
    pub translations: Catalogue,

    /// Named forms
    #[serde(default)]
    pub forms: BTreeMap<String, FormSchema>,
}

/// Label formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Capitalize each word of a label (default: true)
    #[serde(default = "default_true")]
    pub capitalize: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { capitalize: true }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Rule factory wired with the translation catalogue and label settings
    pub fn rules(&self) -> Rules {
        Rules::new(self.translations.clone()).capitalize_labels(self.labels.capitalize)
    }

    pub fn form(&self, name: &str) -> Option<&FormSchema> {
        self.forms.get(name)
    }

    /// Build a validator for a named form
    pub fn validator(&self, name: &str) -> Result<Validator> {
        let form = self
            .form(name)
            .with_context(|| format!("Unknown form: {}", name))?;
        let rules = form
            .build(&self.rules())
            .with_context(|| format!("Invalid rules in form: {}", name))?;
        Ok(create_validator(rules, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValuesMap;
    use crate::value::FieldValue;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.labels.capitalize);
        assert!(config.translations.is_empty());
        assert!(config.forms.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("  \n").unwrap();
        assert!(config.labels.capitalize);
        assert!(config.forms.is_empty());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("does/not/exist/rusty-rules.toml").unwrap();
        assert!(config.forms.is_empty());
    }

    #[test]
    fn test_translations_apply_to_labels_and_fragments() {
        let toml = r#"
            [labels]
            capitalize = false

            [translations]
            "name" = "nom"
            "is required" = "est obligatoire"

            [forms.contact.fields.name]
            rules = [{ rule = "required" }]
        "#;
        let config = Config::parse(toml).unwrap();
        let validator = config.validator("contact").unwrap();

        let mut values = ValuesMap::new();
        values.insert("name".to_string(), FieldValue::from(""));

        let errors = validator.validate(&values);
        assert_eq!(errors.get("name"), Some("nom est obligatoire"));
    }

    #[test]
    fn test_unknown_form() {
        let err = Config::default().validator("missing").unwrap_err();
        assert!(err.to_string().contains("Unknown form: missing"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::parse("[labels\ncapitalize = true").is_err());
    }
}
