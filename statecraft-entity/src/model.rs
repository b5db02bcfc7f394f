//! The entity model: the per-type registration table of descriptors and
//! rules.

use statecraft_rules::{AuthorizationRule, RuleEngine, ValidationRule};
use statecraft_types::PropertyDescriptor;
use std::sync::Arc;

/// Declares one entity type: its name, its managed properties, and the
/// rules governing them.
///
/// Built once per entity type and shared read-only by every instance via
/// [`Arc`]. This replaces reflective property registration with an explicit
/// table: descriptors and rules are passed by stable field name, no runtime
/// reflection involved.
#[derive(Debug)]
pub struct EntityModel {
    type_name: String,
    properties: Vec<PropertyDescriptor>,
    rules: RuleEngine,
}

impl EntityModel {
    /// Creates a model with the given properties and no rules yet.
    #[must_use]
    pub fn new(type_name: &str, properties: Vec<PropertyDescriptor>) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
            rules: RuleEngine::new(),
        }
    }

    /// The entity type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// All registered property descriptors, in registration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Looks up the descriptor for a property name.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|d| d.name == name)
    }

    /// Registers a validation rule.
    pub fn add_validation_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.add_validation_rule(rule);
    }

    /// Registers an authorization rule.
    pub fn add_authorization_rule(&mut self, rule: AuthorizationRule) {
        self.rules.add_authorization_rule(rule);
    }

    /// The rule engine for this type.
    #[must_use]
    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Finishes registration, producing the shared handle instances bind to.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lookup_by_name() {
        let model = EntityModel::new(
            "assignment",
            vec![
                PropertyDescriptor::text("project_name"),
                PropertyDescriptor::number("role", 0),
            ],
        );

        assert_eq!(model.type_name(), "assignment");
        assert!(model.descriptor("role").is_some());
        assert!(model.descriptor("missing").is_none());
        assert_eq!(model.properties().len(), 2);
    }
}
