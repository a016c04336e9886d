//! Declarative per-field validation.
//!
//! A [`RuleSet`] maps each [`Field`] to a [`ValidationRule`]. One engine
//! evaluates every rule the same way, in this order:
//!
//! 1. blacklisted words (exact match, rejects)
//! 2. blacklisted characters (stripped)
//! 3. `max_chars` (truncates)
//! 4. `min_chars` (rejects)
//!
//! Fields are checked in the order the rule set declares them and the first
//! failure stops evaluation.

use crate::model::{Field, ResolvedFields};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Blacklisted,
    TooShort,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Blacklisted => f.write_str("blacklisted"),
            Reason::TooShort => f.write_str("too-short"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.field, .reason, .value))]
pub struct ValidationError {
    pub field: Field,
    pub reason: Reason,
    pub value: String,
}

fn describe(field: &Field, reason: &Reason, value: &str) -> String {
    match reason {
        Reason::Blacklisted => format!("'{}' is not allowed as {}", value, field),
        Reason::TooShort => format!("'{}' is too short as {}", value, field),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRule {
    pub blacklisted_words: Vec<String>,
    pub blacklisted_chars: Vec<char>,
    pub min_chars: usize,
    pub max_chars: Option<usize>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blacklist_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklisted_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    pub fn blacklist_chars(mut self, chars: &str) -> Self {
        self.blacklisted_chars.extend(chars.chars());
        self
    }

    pub fn min_chars(mut self, min: usize) -> Self {
        self.min_chars = min;
        self
    }

    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Runs this rule against `value`, returning the transformed value.
    pub fn apply(&self, field: Field, value: &str) -> Result<String, ValidationError> {
        if self.blacklisted_words.iter().any(|w| w == value) {
            return Err(ValidationError {
                field,
                reason: Reason::Blacklisted,
                value: value.to_string(),
            });
        }

        let mut out: String = value
            .chars()
            .filter(|c| !self.blacklisted_chars.contains(c))
            .collect();

        if let Some(max) = self.max_chars {
            out = out.chars().take(max).collect();
        }

        if out.chars().count() < self.min_chars {
            return Err(ValidationError {
                field,
                reason: Reason::TooShort,
                value: out,
            });
        }

        Ok(out)
    }
}

/// Ordered field → rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(Field, ValidationRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule for `field`, keeping its original position if it was
    /// already present.
    pub fn with_rule(mut self, field: Field, rule: ValidationRule) -> Self {
        match self.rules.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = rule,
            None => self.rules.push((field, rule)),
        }
        self
    }

    pub fn rule(&self, field: Field) -> Option<&ValidationRule> {
        self.rules.iter().find(|(f, _)| *f == field).map(|(_, r)| r)
    }

    pub fn rule_mut(&mut self, field: Field) -> Option<&mut ValidationRule> {
        self.rules
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, ValidationRule)> {
        self.rules.iter()
    }
}

/// The rules every note location must pass.
pub fn default_rules() -> RuleSet {
    RuleSet::new()
        .with_rule(
            Field::Path,
            ValidationRule::new().blacklist_chars(" `<>").min_chars(1),
        )
        .with_rule(
            Field::Filename,
            ValidationRule::new().blacklist_chars("/\\.`<>").min_chars(1),
        )
        .with_rule(
            Field::Extension,
            // Don't let a typo turn a note into an executable.
            ValidationRule::new()
                .blacklist_words(["exe", "msi"])
                .min_chars(1),
        )
}

pub fn validate(
    mut fields: ResolvedFields,
    rules: &RuleSet,
) -> Result<ResolvedFields, ValidationError> {
    for (field, rule) in rules.iter() {
        let checked = rule.apply(*field, fields.get(*field))?;
        *fields.get_mut(*field) = checked;
    }
    Ok(fields)
}
