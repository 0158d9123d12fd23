//! Rusty-Rules
//!
//! Field validation predicates and a small synchronous runner.
//!
//! A [`Rules`] factory builds [`Rule`]s, one constructor per check. Each rule
//! answers `Ok(())` or `Err(message)` for a single [`FieldValue`]. A
//! [`Validator`] applies an ordered list of rules per field and keeps the
//! first failing message for each field.
//!
//! ```
//! use std::collections::HashMap;
//! use rusty_rules::{create_validator, FieldValue, Rules};
//!
//! let rules = Rules::default();
//! let mut map = HashMap::new();
//! map.insert("email".to_string(), vec![rules.required("email"), rules.email("email")]);
//!
//! let validator = create_validator(map, None);
//! let mut values = HashMap::new();
//! values.insert("email".to_string(), FieldValue::from("not-an-email"));
//!
//! let errors = validator.validate(&values);
//! assert_eq!(errors.get("email"), Some("Email is not valid email"));
//! ```

pub mod config;
pub mod context;
pub mod label;
pub mod pattern;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod translate;
pub mod validator;
pub mod value;

pub use config::{Config, LabelConfig};
pub use context::{InputState, InputsMap, ResetHook};
pub use label::capitalize;
pub use rule::{Rule, RuleFault, RuleResult};
pub use rules::{PasswordSource, Rules};
pub use schema::{FieldSchema, FormSchema, RuleSpec, SchemaError};
pub use translate::{Catalogue, Identity, Translator};
pub use validator::{create_validator, RuleList, RulesMap, ValidationErrors, Validator, ValuesMap};
pub use value::FieldValue;
