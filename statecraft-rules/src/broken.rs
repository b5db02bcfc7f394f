//! The broken-rules report: which rules are currently failing for an entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One currently-failing rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenRule {
    /// Name of the rule that failed (e.g. "one-of").
    pub rule: String,
    /// The primary property the rule is bound to.
    pub property: String,
    /// Human-readable failure reason.
    pub description: String,
}

/// Ordered collection of currently-failing rule outcomes.
///
/// Recomputed whenever a governed property changes; an entity is valid
/// exactly when this collection is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenRulesCollection {
    rules: Vec<BrokenRule>,
}

impl BrokenRulesCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no rules are broken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of broken rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Appends a broken-rule outcome, preserving evaluation order.
    pub fn push(&mut self, rule: BrokenRule) {
        self.rules.push(rule);
    }

    /// Iterates broken rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &BrokenRule> {
        self.rules.iter()
    }

    /// Broken rules bound to the named property.
    pub fn for_property<'a>(&'a self, property: &str) -> impl Iterator<Item = &'a BrokenRule> {
        self.rules.iter().filter(move |r| r.property == property)
    }

    /// First broken rule bound to the named property, if any.
    #[must_use]
    pub fn first_for(&self, property: &str) -> Option<&BrokenRule> {
        self.for_property(property).next()
    }
}

impl<'a> IntoIterator for &'a BrokenRulesCollection {
    type Item = &'a BrokenRule;
    type IntoIter = std::slice::Iter<'a, BrokenRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for BrokenRulesCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {} ({})", rule.property, rule.description, rule.rule)?;
        }
        Ok(())
    }
}
