//! The rule engine: ordered registry plus evaluation.

use crate::{
    AuthorizationAction, AuthorizationRule, AuthorizationTarget, BrokenRule,
    BrokenRulesCollection, PrincipalProvider, ValidationRule, ValueSource,
};
use std::fmt;
use tracing::debug;

/// Registry of validation and authorization rules for one entity type.
///
/// Rules accumulate in registration order, which fixes the evaluation order
/// and thereby the order of entries in the broken-rules report.
#[derive(Default)]
pub struct RuleEngine {
    validation: Vec<Box<dyn ValidationRule>>,
    authorization: Vec<AuthorizationRule>,
}

impl RuleEngine {
    /// Creates an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a validation rule.
    pub fn add_validation_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.validation.push(rule);
    }

    /// Registers an authorization rule.
    pub fn add_authorization_rule(&mut self, rule: AuthorizationRule) {
        self.authorization.push(rule);
    }

    /// Number of registered validation rules.
    #[must_use]
    pub fn validation_rule_count(&self) -> usize {
        self.validation.len()
    }

    /// Number of registered authorization rules.
    #[must_use]
    pub fn authorization_rule_count(&self) -> usize {
        self.authorization.len()
    }

    /// Runs every validation rule against the current values and returns
    /// the full report.
    ///
    /// Rules are independent: every rule is evaluated even when earlier
    /// ones fail, so the report never understates what is broken.
    pub fn evaluate(&self, values: &dyn ValueSource) -> BrokenRulesCollection {
        let mut broken = BrokenRulesCollection::new();
        for rule in &self.validation {
            if let Err(reason) = rule.check(values) {
                debug!(
                    rule = rule.name(),
                    property = rule.primary_property(),
                    "validation rule failed: {reason}"
                );
                broken.push(BrokenRule {
                    rule: rule.name().to_string(),
                    property: rule.primary_property().to_string(),
                    description: reason,
                });
            }
        }
        broken
    }

    /// Evaluates authorization for an action/target pair.
    ///
    /// Deny overrides allow: every matching rule must permit the principal.
    /// A pair no rule matches is allowed.
    #[must_use]
    pub fn authorize(
        &self,
        action: AuthorizationAction,
        target: &AuthorizationTarget,
        principal: &dyn PrincipalProvider,
    ) -> bool {
        for rule in &self.authorization {
            if rule.matches(action, target) && !rule.permits(principal) {
                debug!(%action, %target, "authorization denied");
                return false;
            }
        }
        true
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("validation_rules", &self.validation.len())
            .field("authorization_rules", &self.authorization.len())
            .finish()
    }
}
