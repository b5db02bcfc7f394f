//! Property descriptors: the per-field registration record an entity model
//! is built from.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The semantic type of a managed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Bool,
    DateTime,
    Enum,
    Relation,
    Json,
}

/// Describes one managed field: name, semantic type, and the default value
/// returned before the field is ever set.
///
/// Descriptors are created once per entity type at registration time and
/// shared read-only by every instance of that type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub field_type: FieldType,
    pub default: Value,
}

impl PropertyDescriptor {
    fn simple(name: &str, field_type: FieldType, default: Value) -> Self {
        Self {
            name: name.into(),
            field_type,
            default,
        }
    }

    /// Shorthand for a text field defaulting to the empty string.
    pub fn text(name: &str) -> Self {
        Self::simple(name, FieldType::Text, Value::String(String::new()))
    }

    /// Shorthand for a numeric field with an explicit default.
    pub fn number(name: &str, default: i64) -> Self {
        Self::simple(name, FieldType::Number, default.into())
    }

    /// Shorthand for a boolean field defaulting to false.
    pub fn bool(name: &str) -> Self {
        Self::simple(name, FieldType::Bool, Value::Bool(false))
    }

    /// Shorthand for a DateTime field (RFC 3339 text, null until assigned).
    pub fn datetime(name: &str) -> Self {
        Self::simple(name, FieldType::DateTime, Value::Null)
    }

    /// Shorthand for an enum-valued field with an explicit default.
    pub fn enumeration(name: &str, default: impl Into<Value>) -> Self {
        Self::simple(name, FieldType::Enum, default.into())
    }

    /// Shorthand for a relation (reference to another entity) field.
    pub fn relation(name: &str) -> Self {
        Self::simple(name, FieldType::Relation, Value::Null)
    }

    /// Shorthand for a free-form JSON field.
    pub fn json(name: &str) -> Self {
        Self::simple(name, FieldType::Json, Value::Null)
    }

    /// Replaces the registered default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }
}
