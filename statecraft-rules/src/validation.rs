//! The validation-rule seam: per-property predicates over current values.

use serde_json::Value;

/// Read access to current field values during rule evaluation.
///
/// Implemented by the property store; returns the registered default for a
/// property that has never been set, so rules never observe a half-built
/// entity.
pub trait ValueSource {
    /// Current value of the named property, or its registered default.
    fn value_of(&self, property: &str) -> Value;
}

/// A data-shape predicate bound to one or more properties.
///
/// Rules run independently: one rule's failure never skips another, and the
/// full report is always produced. A rule rejects by returning
/// `Err(reason)`; the engine records the reason against the rule's primary
/// (first bound) property.
pub trait ValidationRule: Send + Sync {
    /// Stable rule name used in broken-rule reports.
    fn name(&self) -> &str;

    /// The properties this rule is bound to; the first is the primary.
    fn properties(&self) -> &[String];

    /// Evaluates the predicate against current values.
    fn check(&self, values: &dyn ValueSource) -> Result<(), String>;

    /// The property a failure is reported against.
    fn primary_property(&self) -> &str {
        self.properties().first().map(String::as_str).unwrap_or("")
    }
}
