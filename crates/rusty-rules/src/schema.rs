//! Declarative rule lists.
//!
//! A [`FormSchema`] describes the rules of each field as data, so forms can
//! live in the config file:
//!
//! ```toml
//! [fields.email]
//! label = "email address"
//! rules = [{ rule = "required" }, { rule = "email" }]
//!
//! [fields.age]
//! rules = [{ rule = "number", min = 18, max = 120 }]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::rule::Rule;
use crate::rules::{PasswordSource, Rules, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH};
use crate::validator::{create_validator, RulesMap, Validator};
use crate::value::FieldValue;

/// A schema that cannot be turned into rules.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("field `{field}`: `{rule}` minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        field: String,
        rule: &'static str,
        min: f64,
        max: f64,
    },

    #[error("field `{field}`: `{rule}` bound is not a number")]
    NotANumber { field: String, rule: &'static str },

    #[error("field `{field}`: `{rule}` needs at least one value")]
    EmptyValues { field: String, rule: &'static str },

    #[error("field `{field}`: `confirm_password` needs exactly one of `field` or `value`")]
    PasswordSource { field: String },
}

/// One rule, tagged by its constructor name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Required,
    Boolean,
    InValues {
        values: Vec<FieldValue>,
    },
    NotInValues {
        values: Vec<FieldValue>,
    },
    Number {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    Title {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Description {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Hex {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Name,
    Email,
    Username,
    Password,
    StrictPassword,
    ConfirmPassword {
        #[serde(default)]
        field: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    Phone,
    PhoneLibya,
    IpAndHostname,
    SenderId,
    TaxNumber,
    CommercialRegistry,
    CommercialChamber,
    CommercialNumber,
    BranchNumber,
    AccountNumber,
    AccountClass,
    Iban,
    IbanLibya,
    IdentificationNumber,
    IdentificationNumberDigits,
    PassportNumber,
    IdentityNumber,
    LicenseNumber,
    EmployeeNumber,
    NationalId,
    FieldName,
    EntityName,
    ArabicOnly,
    EnglishOnly,
}

impl RuleSpec {
    /// Every `rule` tag accepted in a schema.
    pub const NAMES: &'static [&'static str] = &[
        "required",
        "boolean",
        "in_values",
        "not_in_values",
        "number",
        "title",
        "description",
        "hex",
        "name",
        "email",
        "username",
        "password",
        "strict_password",
        "confirm_password",
        "phone",
        "phone_libya",
        "ip_and_hostname",
        "sender_id",
        "tax_number",
        "commercial_registry",
        "commercial_chamber",
        "commercial_number",
        "branch_number",
        "account_number",
        "account_class",
        "iban",
        "iban_libya",
        "identification_number",
        "identification_number_digits",
        "passport_number",
        "identity_number",
        "license_number",
        "employee_number",
        "national_id",
        "field_name",
        "entity_name",
        "arabic_only",
        "english_only",
    ];

    /// Build the rule for `field`, shown to users as `label`.
    pub fn build(&self, rules: &Rules, field: &str, label: &str) -> Result<Rule, SchemaError> {
        let rule = match self {
            RuleSpec::Required => rules.required(label),
            RuleSpec::Boolean => rules.boolean(label),
            RuleSpec::InValues { values } => {
                non_empty(field, "in_values", values)?;
                rules.in_values(label, values.iter().cloned())
            }
            RuleSpec::NotInValues { values } => {
                non_empty(field, "not_in_values", values)?;
                rules.not_in_values(label, values.iter().cloned())
            }
            RuleSpec::Number { min, max } => {
                for bound in [min, max].into_iter().flatten() {
                    if bound.is_nan() {
                        return Err(SchemaError::NotANumber {
                            field: field.to_string(),
                            rule: "number",
                        });
                    }
                }
                if let (Some(min), Some(max)) = (min, max) {
                    ordered(field, "number", *min, *max)?;
                }
                rules.number(label, *min, *max)
            }
            RuleSpec::Title { min, max } => {
                let (min, max) = lengths(field, "title", *min, *max, TITLE_MAX_LENGTH)?;
                rules.title_bounded(label, min, max)
            }
            RuleSpec::Description { min, max } => {
                let (min, max) = lengths(field, "description", *min, *max, DESCRIPTION_MAX_LENGTH)?;
                rules.description_bounded(label, min, max)
            }
            RuleSpec::Hex { min, max } => {
                let (min, max) = lengths(field, "hex", *min, *max, TITLE_MAX_LENGTH)?;
                rules.hex_bounded(label, min, max)
            }
            RuleSpec::Name => rules.name(label),
            RuleSpec::Email => rules.email(label),
            RuleSpec::Username => rules.username(label),
            RuleSpec::Password => rules.password(label),
            RuleSpec::StrictPassword => rules.strict_password(label),
            RuleSpec::ConfirmPassword { field: source, value } => {
                let source = match (source, value) {
                    (Some(other), None) => PasswordSource::Field(other.clone()),
                    (None, Some(captured)) => PasswordSource::Captured(captured.clone()),
                    _ => {
                        return Err(SchemaError::PasswordSource {
                            field: field.to_string(),
                        })
                    }
                };
                rules.confirm_password(label, source)
            }
            RuleSpec::Phone => rules.phone(label),
            RuleSpec::PhoneLibya => rules.phone_libya(label),
            RuleSpec::IpAndHostname => rules.ip_and_hostname(label),
            RuleSpec::SenderId => rules.sender_id(label),
            RuleSpec::TaxNumber => rules.tax_number(label),
            RuleSpec::CommercialRegistry => rules.commercial_registry(label),
            RuleSpec::CommercialChamber => rules.commercial_chamber(label),
            RuleSpec::CommercialNumber => rules.commercial_number(label),
            RuleSpec::BranchNumber => rules.branch_number(label),
            RuleSpec::AccountNumber => rules.account_number(label),
            RuleSpec::AccountClass => rules.account_class(label),
            RuleSpec::Iban => rules.iban(label),
            RuleSpec::IbanLibya => rules.iban_libya(label),
            RuleSpec::IdentificationNumber => rules.identification_number(label),
            RuleSpec::IdentificationNumberDigits => rules.identification_number_digits(label),
            RuleSpec::PassportNumber => rules.passport_number(label),
            RuleSpec::IdentityNumber => rules.identity_number(label),
            RuleSpec::LicenseNumber => rules.license_number(label),
            RuleSpec::EmployeeNumber => rules.employee_number(label),
            RuleSpec::NationalId => rules.national_id(label),
            RuleSpec::FieldName => rules.field_name(label),
            RuleSpec::EntityName => rules.entity_name(label),
            RuleSpec::ArabicOnly => rules.arabic_only(label),
            RuleSpec::EnglishOnly => rules.english_only(label),
        };
        Ok(rule)
    }
}

fn non_empty(field: &str, rule: &'static str, values: &[FieldValue]) -> Result<(), SchemaError> {
    if values.is_empty() {
        return Err(SchemaError::EmptyValues {
            field: field.to_string(),
            rule,
        });
    }
    Ok(())
}

fn ordered(field: &str, rule: &'static str, min: f64, max: f64) -> Result<(), SchemaError> {
    if min > max {
        return Err(SchemaError::InvertedBounds {
            field: field.to_string(),
            rule,
            min,
            max,
        });
    }
    Ok(())
}

fn lengths(
    field: &str,
    rule: &'static str,
    min: Option<usize>,
    max: Option<usize>,
    default_max: usize,
) -> Result<(usize, usize), SchemaError> {
    let min = min.unwrap_or(0);
    let max = max.unwrap_or(default_max);
    ordered(field, rule, min as f64, max as f64)?;
    Ok((min, max))
}

/// Rules of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Label used in messages. Defaults to the field key with underscores
    /// turned into spaces.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl FieldSchema {
    pub fn label_for(&self, field: &str) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| field.replace('_', " "))
    }
}

/// Rules of every field in a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldSchema>,
}

impl FormSchema {
    /// Build rule lists for every field, preserving declared rule order.
    pub fn build(&self, rules: &Rules) -> Result<RulesMap, SchemaError> {
        let mut map = RulesMap::new();
        for (field, schema) in &self.fields {
            let label = schema.label_for(field);
            let list = schema
                .rules
                .iter()
                .map(|spec| spec.build(rules, field, &label))
                .collect::<Result<Vec<_>, _>>()?;
            map.insert(field.clone(), list);
        }
        Ok(map)
    }

    /// Build a validator with no context.
    pub fn validator(&self, rules: &Rules) -> Result<Validator, SchemaError> {
        Ok(create_validator(self.build(rules)?, None))
    }
}
