//! Lazily compiled regular expressions.
//!
//! Patterns live in statics and compile on first use. A pattern that fails
//! to compile reports a [`RuleFault`] every time it is used instead of
//! panicking, so the rule that owns it can degrade to its failure message.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::rule::RuleFault;

pub struct Pattern {
    source: &'static str,
    compiled: OnceCell<Result<Regex, regex::Error>>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceCell::new(),
        }
    }

    pub fn regex(&self) -> Result<&Regex, RuleFault> {
        match self.compiled.get_or_init(|| Regex::new(self.source)) {
            Ok(regex) => Ok(regex),
            Err(error) => Err(RuleFault::Pattern {
                pattern: self.source,
                source: error.clone(),
            }),
        }
    }

    pub fn is_match(&self, text: &str) -> Result<bool, RuleFault> {
        Ok(self.regex()?.is_match(text))
    }
}
