//! The stock validation-rule library: the shapes most entity types need.

use crate::{ValidationRule, ValueSource};
use serde_json::Value;

/// Fails when the property is null or an empty string.
pub struct Required {
    properties: [String; 1],
}

impl Required {
    #[must_use]
    pub fn new(property: &str) -> Self {
        Self {
            properties: [property.into()],
        }
    }
}

impl ValidationRule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn check(&self, values: &dyn ValueSource) -> Result<(), String> {
        let property = &self.properties[0];
        match values.value_of(property) {
            Value::Null => Err(format!("{property} is required")),
            Value::String(s) if s.is_empty() => Err(format!("{property} is required")),
            _ => Ok(()),
        }
    }
}

/// Fails when a string value exceeds the maximum length.
///
/// Non-string values pass; presence and typing are other rules' concerns.
pub struct MaxLength {
    properties: [String; 1],
    max: usize,
}

impl MaxLength {
    #[must_use]
    pub fn new(property: &str, max: usize) -> Self {
        Self {
            properties: [property.into()],
            max,
        }
    }
}

impl ValidationRule for MaxLength {
    fn name(&self) -> &str {
        "max-length"
    }

    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn check(&self, values: &dyn ValueSource) -> Result<(), String> {
        let property = &self.properties[0];
        match values.value_of(property) {
            Value::String(s) if s.chars().count() > self.max => Err(format!(
                "{property} cannot exceed {} characters",
                self.max
            )),
            _ => Ok(()),
        }
    }
}

/// Fails when a numeric value falls outside an inclusive range.
///
/// Null passes (use [`Required`] for presence); a non-numeric value fails.
pub struct InRange {
    properties: [String; 1],
    min: f64,
    max: f64,
}

impl InRange {
    #[must_use]
    pub fn new(property: &str, min: f64, max: f64) -> Self {
        Self {
            properties: [property.into()],
            min,
            max,
        }
    }
}

impl ValidationRule for InRange {
    fn name(&self) -> &str {
        "in-range"
    }

    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn check(&self, values: &dyn ValueSource) -> Result<(), String> {
        let property = &self.properties[0];
        let value = values.value_of(property);
        if value.is_null() {
            return Ok(());
        }
        match value.as_f64() {
            Some(n) if n >= self.min && n <= self.max => Ok(()),
            Some(_) => Err(format!(
                "{property} must be between {} and {}",
                self.min, self.max
            )),
            None => Err(format!("{property} must be a number")),
        }
    }
}

/// Fails when the value is not a member of the allowed set.
///
/// This is the enum-membership check: a role field constrained to the
/// role list's known values is `OneOf::new("role", role_values)`.
pub struct OneOf {
    properties: [String; 1],
    allowed: Vec<Value>,
}

impl OneOf {
    #[must_use]
    pub fn new(property: &str, allowed: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            properties: [property.into()],
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl ValidationRule for OneOf {
    fn name(&self) -> &str {
        "one-of"
    }

    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn check(&self, values: &dyn ValueSource) -> Result<(), String> {
        let property = &self.properties[0];
        let value = values.value_of(property);
        if self.allowed.contains(&value) {
            Ok(())
        } else {
            Err(format!("{property} must be one of the allowed values"))
        }
    }
}
