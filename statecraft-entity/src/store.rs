//! The property store: per-instance governed field state.

use crate::EntityModel;
use serde_json::{Map, Value};
use statecraft_rules::ValueSource;
use statecraft_types::PropertyDescriptor;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug)]
struct PropertyState {
    value: Value,
    dirty: bool,
}

/// Holds each managed field's current value and dirty flag, plus the cached
/// read-authorization verdicts for this instance.
///
/// A property never set returns its registered default. The store is owned
/// exclusively by one entity instance and performs no I/O and no rule
/// evaluation — governance lives in the owning entity.
#[derive(Debug)]
pub struct PropertyStore {
    model: Arc<EntityModel>,
    values: HashMap<String, PropertyState>,
    read_verdicts: RefCell<HashMap<String, bool>>,
}

impl PropertyStore {
    /// Creates an empty store bound to its entity model.
    #[must_use]
    pub fn new(model: Arc<EntityModel>) -> Self {
        Self {
            model,
            values: HashMap::new(),
            read_verdicts: RefCell::new(HashMap::new()),
        }
    }

    /// Current value of a property, or its registered default if it was
    /// never set. Undeclared names yield `Null`.
    #[must_use]
    pub fn get(&self, property: &str) -> Value {
        if let Some(state) = self.values.get(property) {
            return state.value.clone();
        }
        self.model
            .descriptor(property)
            .map(|d| d.default.clone())
            .unwrap_or(Value::Null)
    }

    /// Governed write: updates the value and marks the property dirty.
    pub fn set(&mut self, descriptor: &PropertyDescriptor, value: Value) {
        self.values
            .insert(descriptor.name.clone(), PropertyState { value, dirty: true });
    }

    /// Trusted write for system-initiated state (factory load, token
    /// application): updates the value without touching the dirty flag.
    pub fn load(&mut self, descriptor: &PropertyDescriptor, value: Value) {
        let dirty = self
            .values
            .get(&descriptor.name)
            .is_some_and(|state| state.dirty);
        self.values
            .insert(descriptor.name.clone(), PropertyState { value, dirty });
    }

    /// True if any property has been set since load/creation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values.values().any(|state| state.dirty)
    }

    /// True if the named property has been set since load/creation.
    #[must_use]
    pub fn property_is_dirty(&self, property: &str) -> bool {
        self.values
            .get(property)
            .is_some_and(|state| state.dirty)
    }

    /// Clears all dirty flags after a successful persistence call.
    pub fn mark_clean(&mut self) {
        for state in self.values.values_mut() {
            state.dirty = false;
        }
    }

    /// The field map handed to the persistence backend: current value or
    /// registered default for every declared property.
    #[must_use]
    pub fn snapshot(&self) -> Map<String, Value> {
        self.model
            .properties()
            .iter()
            .map(|d| (d.name.clone(), self.get(&d.name)))
            .collect()
    }

    /// Cached read-authorization verdict for a property, computing it on
    /// first use. The verdict holds for the instance's lifetime.
    pub(crate) fn read_allowed(&self, property: &str, compute: impl FnOnce() -> bool) -> bool {
        if let Some(&verdict) = self.read_verdicts.borrow().get(property) {
            return verdict;
        }
        let verdict = compute();
        self.read_verdicts
            .borrow_mut()
            .insert(property.to_string(), verdict);
        verdict
    }
}

impl ValueSource for PropertyStore {
    fn value_of(&self, property: &str) -> Value {
        self.get(property)
    }
}
